use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use icfpc2015::config::Config;
use icfpc2015::solutions;

/// Picks the best-scoring solution file per (problem, seed), merges the
/// winners into one payload and uploads it to the contest service.
#[derive(Parser)]
struct Cli {
    /// Directory of result files named <problemId>-<seed>-<score>.json.
    #[clap(long, short = 's', default_value = "solutions")]
    solutions: PathBuf,
    /// Write the merged payload to this file before submitting.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,
    /// JSON config file; credentials come from the environment if omitted.
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,
    /// Build (and optionally write) the payload without submitting.
    #[clap(long, default_value_t = false)]
    dry_run: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("submit_best error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Cli::parse();

    let winners = solutions::select_winners(&args.solutions)?;
    let payload = solutions::load_and_merge(&winners)?;
    println!(
        "{}: {} winner(s), payload of {} solution(s)",
        args.solutions.display(),
        winners.len(),
        payload.len()
    );

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("failed to create payload file: {}", path.display()))?;
        serde_json::to_writer(file, &payload)
            .with_context(|| format!("failed to write payload file: {}", path.display()))?;
        println!("wrote payload to {}", path.display());
    }

    if args.dry_run {
        println!("dry run, not submitting");
        return Ok(());
    }

    let config = Config::load(args.config.as_deref())?;
    let status = icfpc2015::api::submit_solutions(&config, &payload)?;
    println!("POST {} -> {}", config.solutions_url(), status);
    Ok(())
}
