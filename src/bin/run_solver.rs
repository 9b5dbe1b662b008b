use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};
use clap::Parser;
use icfpc2015::phrases;

/// Runs the solver binary with every phrase of power from a phrase file,
/// passing any extra arguments straight through.
#[derive(Parser)]
#[clap(trailing_var_arg = true)]
struct Cli {
    /// Phrase file, one phrase per line.
    #[clap(long, short = 'p', default_value = "pop")]
    phrases: PathBuf,
    /// Solver binary to invoke.
    #[clap(long, default_value = "./target/release/solve-davar")]
    solver: PathBuf,
    /// Arguments passed through to the solver.
    #[clap(allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("run_solver error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let phrases = phrases::load_phrases(&cli.phrases)?;
    let mut args = phrases::phrase_args(&phrases);
    args.extend(cli.args.iter().cloned());

    println!("Running: {} {}", cli.solver.display(), args.join(" "));
    let status = Command::new(&cli.solver)
        .args(&args)
        .status()
        .with_context(|| format!("failed to spawn solver: {}", cli.solver.display()))?;
    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}
