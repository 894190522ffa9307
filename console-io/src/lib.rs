//! Console plumbing shared by the `guess` and `calc` programs.
//!
//! - **[`input`]**: scanf-style token reads over any `BufRead`.
//! - **[`console`]**: reader + stdout + stderr bundle used by the session loops.
//! - **[`config`]**: optional TOML configuration with explicit validation.
//! - **[`logging`]** and **[`exit_codes`]**: process-level conventions.

pub mod config;
pub mod console;
pub mod exit_codes;
pub mod input;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
