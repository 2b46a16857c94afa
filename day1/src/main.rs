use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use day1::{parse_input, similarity_score, total_distance};
use tracing_subscriber::EnvFilter;

/// Total distance and similarity score between two columns of numbers.
#[derive(Parser)]
#[command(name = "day1", version)]
struct Cli {
    /// Puzzle input, two numbers per line.
    #[arg(default_value = "input/day1.txt")]
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
    let (mut left, mut right) =
        parse_ints::input::load(&cli.input, parse_input).context("loading location lists")?;
    tracing::debug!(path = %cli.input.display(), rows = left.len(), "parsed input");

    let part1 = total_distance(&mut left, &mut right);
    let part2 = similarity_score(&left, &right);
    tracing::info!(part1, part2, "solved");
    println!("{part1},{part2}");
    Ok(())
}
