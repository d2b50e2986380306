//! Application state and key handling.
//!
//! `App` owns the single [`GameState`] of the session. Key presses are
//! translated into calls on it; nothing derived from the game is cached here.

use crate::input;
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Row in the displayed move list, not a history step.
    history_row: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given move-list order.
    #[instrument]
    pub fn new(sort_ascending: bool) -> Self {
        Self {
            game: GameState::with_sort_order(sort_ascending),
            cursor: Position::Center,
            focus: Focus::Board,
            history_row: 0,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row of the move list.
    pub fn history_row(&self) -> usize {
        self.history_row
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatches a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => self.toggle_sort_order(),
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = input::digit_position(c) {
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump_to_highlighted(),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = input::move_cursor(self.cursor, key),
                Focus::History => self.move_history_row(key),
            },
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        match self.game.apply_move(pos) {
            MoveOutcome::Applied { step, player } => {
                debug!(%pos, %player, step, "Move played");
                self.history_row = self.row_of_step(step);
            }
            MoveOutcome::Ignored(reason) => debug!(%pos, %reason, "Move ignored"),
        }
    }

    fn jump_to_highlighted(&mut self) {
        if let Some(step) = self.highlighted_step() {
            self.game.jump_to(step);
        }
    }

    fn toggle_sort_order(&mut self) {
        let step = self.highlighted_step().unwrap_or(0);
        self.game.toggle_sort_order();
        self.history_row = self.row_of_step(step);
    }

    fn new_game(&mut self) {
        info!("New game");
        self.game.new_game();
        self.history_row = 0;
    }

    fn move_history_row(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        self.history_row = match key {
            KeyCode::Up => self.history_row.saturating_sub(1),
            KeyCode::Down => (self.history_row + 1).min(last),
            _ => self.history_row,
        };
    }

    /// History step shown on the highlighted row.
    pub fn highlighted_step(&self) -> Option<usize> {
        self.game.move_list().get(self.history_row).map(|item| item.step)
    }

    fn row_of_step(&self, step: usize) -> usize {
        if self.game.is_sort_ascending() {
            step
        } else {
            self.game.history().len() - 1 - step
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}
