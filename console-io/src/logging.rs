//! Development-time tracing for the console programs.
//!
//! Program output (prompts, hints, results) goes to stdout and user-facing
//! errors to stderr through [`crate::console::Console`]. Tracing is separate:
//! dev diagnostics only, enabled via `RUST_LOG`, written to stderr.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_LEVEL`].
///
/// Invalid directives are skipped rather than aborting startup.
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .from_env_lossy()
}

/// Install the stderr subscriber for an interactive session.
///
/// Timestamps and targets are dropped so diagnostics interleave readably
/// with prompts. A second call is a no-op.
///
/// # Example
/// ```bash
/// RUST_LOG=calc=debug cargo run -p calc
/// ```
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
