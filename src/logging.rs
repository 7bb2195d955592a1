//! Diagnostic logging setup.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer. `RUST_LOG`
//! wins over the configured level; `--verbose` wins over both.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Level used when `--verbose` is given.
pub const VERBOSE_LEVEL: &str = "debug";

/// Build the filter for the given configuration.
pub fn build_filter(configured_level: &str, verbose: bool) -> Result<EnvFilter> {
    if verbose {
        return Ok(EnvFilter::new(VERBOSE_LEVEL));
    }
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(configured_level)
            .map_err(|e| anyhow!("Invalid log level {:?}: {}", configured_level, e)),
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(configured_level: &str, verbose: bool) -> Result<()> {
    let filter = build_filter(configured_level, verbose)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
