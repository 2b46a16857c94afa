use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use day2::{count_safe, count_tolerably_safe, parse_input, trace_rescues};
use tracing_subscriber::EnvFilter;

/// Count safe reports, with and without the single-level tolerance.
#[derive(Parser)]
#[command(name = "day2", version)]
struct Cli {
    /// Puzzle input, one report per line.
    #[arg(default_value = "input/day2.txt")]
    input: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();
    let reports = parse_ints::input::load(&cli.input, parse_input).context("loading reports")?;
    tracing::debug!(path = %cli.input.display(), reports = reports.len(), "parsed input");

    trace_rescues(&reports);

    let part1 = count_safe(&reports);
    let part2 = count_tolerably_safe(&reports);
    tracing::info!(part1, part2, "solved");
    println!("{part1},{part2}");
    Ok(())
}
