//! Simulation CLI — estimate per-strategy win rates from the command line.
//!
//! Usage:
//!   cargo run --release -- --games 1000000 --workers 8
//!   cargo run --release -- --roster roster.toml --allowance 5 --json

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use coin_arena::engine::arena::run_simulation;
use coin_arena::engine::models::SimConfig;
use coin_arena::engine::roster::{default_roster, load_roster};

#[derive(Parser)]
#[command(name = "coin-arena", about = "Run coin-toss elimination game simulations")]
struct Cli {
    /// Number of games to play
    #[arg(long, default_value = "1000000")]
    games: u64,

    /// Parallel workers (0 means 1)
    #[arg(long, default_value = "4", env = "COIN_ARENA_WORKERS")]
    workers: usize,

    /// Wrong guesses allowed per player per game
    #[arg(long, default_value = "20")]
    allowance: u32,

    /// Base random seed; worker i is seeded base + i
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Path to a roster TOML file (default: built-in roster)
    #[arg(long, env = "COIN_ARENA_ROSTER")]
    roster: Option<PathBuf>,

    /// Emit results as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    let specs = match &cli.roster {
        Some(path) => load_roster(path)?,
        None => default_roster(),
    };

    let config = SimConfig {
        games: cli.games,
        base_allowance: cli.allowance,
        workers: cli.workers,
        base_seed: cli.seed,
    };

    let t0 = Instant::now();
    let results = run_simulation(&config, &specs)?;
    let elapsed = t0.elapsed();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results.to_json())?);
    } else {
        println!("{}", results.summary());
        println!("Elapsed: {:.2}s", elapsed.as_secs_f64());
    }

    Ok(())
}
