//! Headless match-3 runner (default binary).
//!
//! Drives the board simulation at a fixed tick cadence with the autonomous
//! player enabled, then reports the final score. Useful for soak-testing the
//! state machine and for reproducing a game from a seed; rendering and input
//! adapters live elsewhere and consume the same `Game` API this driver does.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use match3::core::{Game, GameConfig};
use match3::types::TICK_MS;

#[derive(Debug, Parser)]
#[command(name = "match3", about = "Headless match-3 simulation driver")]
struct Args {
    /// RNG seed; a seed fully determines the game.
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Number of 16 ms ticks to simulate (default is five minutes).
    #[arg(long, default_value_t = 18_750)]
    ticks: u32,

    /// Optional TOML config file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run without the autonomous player (the board just sits there).
    #[arg(long)]
    no_bot: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut game = Game::new(config, args.seed)?;
    if !args.no_bot {
        game.toggle_ai_bot();
    }

    let mut ticks_run = 0;
    for _ in 0..args.ticks {
        game.tick(TICK_MS);
        ticks_run += 1;
        if game.game_over() {
            break;
        }
    }

    info!(
        seed = args.seed,
        ticks = ticks_run,
        score = game.score(),
        game_over = game.game_over(),
        "simulation finished"
    );
    println!("score: {}", game.score());
    Ok(())
}
