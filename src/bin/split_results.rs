use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use icfpc2015::chunks;

/// Splits a large results log into numbered chunk files.
#[derive(Parser)]
struct Cli {
    /// Results log file to split.
    #[clap(long, short = 'i', default_value = "metadata.json")]
    input: PathBuf,
    /// Output directory; recreated from scratch on every run.
    #[clap(long, short = 'o', default_value = "parsed")]
    out_dir: PathBuf,
    /// Records per chunk file.
    #[clap(long, short = 'n', default_value_t = 200)]
    per_chunk: usize,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("split_results error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Cli::parse();
    let count = chunks::write_chunks(&args.input, &args.out_dir, args.per_chunk)?;
    println!(
        "wrote {} chunk file(s) to {}; the highest number holds the most recent records",
        count,
        args.out_dir.display()
    );
    Ok(())
}
