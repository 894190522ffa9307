//! Menu-driven calculator: add, subtract, multiply, divide, modulus, power.

use std::path::PathBuf;

use anyhow::{Context, Result};
use calc::config::CalcConfig;
use calc::session::Calculator;
use clap::Parser;
use console_io::config::load_config;
use console_io::console::StdConsole;
use console_io::{exit_codes, logging};

#[derive(Parser)]
#[command(name = "calc", version, about = "Simple menu-driven calculator")]
struct Cli {
    /// TOML file overriding the result precision.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg: CalcConfig = load_config(cli.config.as_deref()).context("load calculator config")?;
    let mut console = StdConsole::stdio();
    Calculator::new(&mut console, cfg.precision).run()?;
    Ok(())
}
