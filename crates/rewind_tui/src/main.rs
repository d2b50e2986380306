//! Rewind - tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use rewind_tui::{Cli, logging};
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    logging::init(&config)?;

    info!(config = %cli.config.display(), "Configuration resolved");
    rewind_tui::run(&config)
}
