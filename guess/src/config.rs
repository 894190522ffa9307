//! Guessing game configuration (`guess --config game.toml`).

use anyhow::{Result, bail};
use console_io::config::ProgramConfig;
use serde::Deserialize;

use crate::game::GuessRange;

/// Bounds for the secret number and an optional fixed seed.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Smallest number that can be drawn (inclusive).
    pub min: i64,

    /// Largest number that can be drawn (inclusive).
    pub max: i64,

    /// Seed for a reproducible draw. Entropy-seeded when unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 100,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn range(&self) -> GuessRange {
        GuessRange {
            min: self.min,
            max: self.max,
        }
    }
}

impl ProgramConfig for GameConfig {
    fn validate(&self) -> Result<()> {
        if self.min > self.max {
            bail!("min ({}) must be <= max ({})", self.min, self.max);
        }
        Ok(())
    }
}
