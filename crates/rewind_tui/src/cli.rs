//! Command-line interface for the terminal game.

use crate::config::{ConfigError, TuiConfig};
use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with a move history you can rewind.
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start with the move list newest first
    #[arg(long)]
    pub descending: bool,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    pub fn resolve_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = TuiConfig::load_or_default(&self.config)?;
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file);
        }
        if self.descending {
            config = config.with_sort_ascending(false);
        }
        Ok(config)
    }
}
