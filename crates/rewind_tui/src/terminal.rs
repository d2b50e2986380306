//! Terminal setup and the blocking event loop.

use crate::app::App;
use crate::config::TuiConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};

/// Runs `restore` when dropped, on normal return and on every early `?`.
struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

fn restore_terminal() {
    debug!("Restoring terminal");
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Runs the game until the user quits, restoring the terminal afterwards.
#[instrument(skip_all)]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Rewind TUI");

    enable_raw_mode()?;
    let _restore = RestoreGuard::new(restore_terminal);

    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(*config.sort_ascending());
    let res = run_app(&mut terminal, app);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

/// Draws, waits for a key, dispatches it. Repeats until quit.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit() {
            info!(steps = app.game().history().len(), "Leaving event loop");
            return Ok(());
        }
    }
}
