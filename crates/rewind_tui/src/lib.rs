//! Terminal frontend for time-travel tic-tac-toe.
//!
//! The frontend is a thin layer over [`rewind_tictactoe::GameState`]: it
//! turns key presses into game operations and renders derived state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;

pub mod logging;
pub mod ui;

pub use app::{App, Focus};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{digit_position, move_cursor};
pub use terminal::run;
