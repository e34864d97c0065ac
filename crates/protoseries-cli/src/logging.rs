//! Tracing subscriber setup

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Build the log filter.
///
/// A valid, non-empty `env` directive (from `RUST_LOG`) wins, then the
/// `--log-level` flag, then the configured level.
fn build_filter(env: Option<&str>, flag: Option<&str>, configured: &str) -> Result<EnvFilter> {
    if let Some(directive) = env.filter(|d| !d.trim().is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(directive) {
            return Ok(filter);
        }
    }

    let level = flag.unwrap_or(configured);
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level: {level}"))
}

/// Initialize logging to stderr
///
/// Stdout is left to command output such as `render`.
pub fn init_logging(flag: Option<&str>, configured: &str) -> Result<()> {
    use tracing_subscriber::prelude::*;

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env.as_deref(), flag, configured)?;
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let subscriber = tracing_subscriber::registry().with(filter).with(layer);

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}
