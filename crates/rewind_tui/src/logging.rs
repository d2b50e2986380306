//! Tracing setup. Output goes to a file so it never draws over the UI.

use crate::config::TuiConfig;
use anyhow::{Context, Result, anyhow};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber writing to the configured log file.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
