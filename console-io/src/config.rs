//! Optional TOML configuration passed with `--config`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Program configuration that can be checked after parsing.
///
/// Implementors are expected to use `#[serde(default)]` so a partial file
/// only overrides the fields it names.
pub trait ProgramConfig: DeserializeOwned + Default {
    fn validate(&self) -> Result<()>;
}

/// Load config from an optional TOML file.
///
/// With no path, returns `C::default()`. A path that was given but cannot
/// be read is an error; there is no silent fallback.
pub fn load_config<C: ProgramConfig>(path: Option<&Path>) -> Result<C> {
    let Some(path) = path else {
        let cfg = C::default();
        cfg.validate()?;
        return Ok(cfg);
    };
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg = parse_config::<C>(&contents).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// Parse and validate config from TOML text.
pub fn parse_config<C: ProgramConfig>(contents: &str) -> Result<C> {
    let cfg: C = toml::from_str(contents).context("deserialize config toml")?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    #[serde(default, deny_unknown_fields)]
    struct Limits {
        low: u32,
        high: u32,
    }

    impl Default for Limits {
        fn default() -> Self {
            Self { low: 1, high: 10 }
        }
    }

    impl ProgramConfig for Limits {
        fn validate(&self) -> Result<()> {
            if self.low > self.high {
                bail!("low must be <= high");
            }
            Ok(())
        }
    }

    #[test]
    fn no_path_returns_default() {
        let cfg: Limits = load_config(None).expect("load");
        assert_eq!(cfg, Limits::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_config::<Limits>(Some(temp.path().join("missing.toml").as_path()))
            .expect_err("missing file");
        assert!(format!("{err:#}").contains("missing.toml"));
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("limits.toml");
        fs::write(&path, "high = 50\n").expect("write");
        let cfg: Limits = load_config(Some(path.as_path())).expect("load");
        assert_eq!(cfg, Limits { low: 1, high: 50 });
    }

    #[test]
    fn validation_failure_is_reported() {
        let err = parse_config::<Limits>("low = 9\nhigh = 3\n").expect_err("invalid");
        assert!(err.to_string().contains("low must be <= high"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(parse_config::<Limits>("lowest = 2\n").is_err());
    }
}
