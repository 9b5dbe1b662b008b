use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use icfpc2015::config::Config;
use icfpc2015::results;

/// Prints the contest results log, oldest submission first.
#[derive(Parser)]
struct Cli {
    /// Results log file (a JSON array of submission records).
    #[clap(long, short = 'i', default_value = "metadata.json")]
    input: PathBuf,
    /// Fetch the listing from the contest service instead of reading a file.
    #[clap(long, default_value_t = false)]
    fetch: bool,
    /// JSON config file; credentials come from the environment if omitted.
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("display_results error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Cli::parse();

    let mut records = if args.fetch {
        let config = Config::load(args.config.as_deref())?;
        icfpc2015::api::fetch_results(&config)?
    } else {
        results::load(&args.input)?
    };

    results::sort_by_created_at(&mut records);
    println!("Listing {} results, most recent last", records.len());
    println!();
    for record in &records {
        println!("{}", results::render(record));
        println!();
    }
    Ok(())
}
