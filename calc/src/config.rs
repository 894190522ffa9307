//! Calculator configuration (`calc --config calc.toml`).

use anyhow::{Result, bail};
use console_io::config::ProgramConfig;
use serde::Deserialize;

/// Most decimal places a result may be shown with.
pub const MAX_PRECISION: usize = 15;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Decimal places used when printing a result.
    pub precision: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl ProgramConfig for CalcConfig {
    fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            bail!("precision must be <= {MAX_PRECISION}");
        }
        Ok(())
    }
}
