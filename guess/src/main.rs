//! Number-guessing game.
//!
//! Draws a secret number and hints "larger"/"smaller" until it is guessed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console_io::config::load_config;
use console_io::console::StdConsole;
use console_io::{exit_codes, logging};
use guess::config::GameConfig;
use guess::game::{Game, draw_target};
use guess::session::{GameOutcome, play};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "guess", version, about = "Guess the secret number")]
struct Cli {
    /// TOML file overriding the number bounds or fixing the seed.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let cfg: GameConfig = load_config(cli.config.as_deref()).context("load game config")?;
    let range = cfg.range();
    let target = match cfg.seed {
        Some(seed) => draw_target(range, &mut StdRng::seed_from_u64(seed)),
        None => draw_target(range, &mut rand::thread_rng()),
    };

    let mut console = StdConsole::stdio();
    match play(Game::new(target), range, &mut console)? {
        GameOutcome::Won { .. } => Ok(exit_codes::OK),
        GameOutcome::Abandoned { .. } => Ok(exit_codes::ABANDONED),
    }
}
