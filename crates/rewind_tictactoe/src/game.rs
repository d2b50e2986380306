//! Game state with move history and time travel.
//!
//! `GameState` stores only the history, the step pointer and two
//! presentation flags. Winner, draw and player-to-move are recomputed from
//! the snapshot at the current step on every query.

use super::history::{HistoryEntry, MoveDescription, MoveListItem};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::position::Position;
use super::rules::{self, WinnerResult};
use super::types::{Board, Player, Square};
use tracing::{debug, instrument, warn};

/// Status derived from the snapshot at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No winner and empty squares remain.
    InProgress {
        /// Player to move next.
        next: Player,
    },
    /// A line has been completed.
    Won(WinnerResult),
    /// Board full with no line.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(result) => write!(f, "Winner: {}", result.player()),
            GameStatus::Draw => write!(f, "It's a draw"),
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,
}

/// Result of [`GameState::apply_move`].
///
/// Rejected moves are not errors: the state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was recorded as a new history entry.
    Applied {
        /// Step of the new entry.
        step: usize,
        /// Player who moved.
        player: Player,
    },
    /// Nothing changed.
    Ignored(MoveRejection),
}

impl MoveOutcome {
    /// Whether the move changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Tic-tac-toe game with a navigable move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
    pub(crate) sort_ascending: bool,
    pub(crate) selected_step: Option<usize>,
}

impl GameState {
    /// Creates a new game with the move list in ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(true)
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort_order(ascending: bool) -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current_step: 0,
            sort_ascending: ascending,
            selected_step: None,
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// Ignored when the square is taken or the current snapshot already has
    /// a winner. Otherwise any entries after the current step are discarded
    /// and the new snapshot becomes the current step.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        let board = self.current_board();

        if let Some(result) = rules::evaluate(board) {
            debug!(winner = %result.player(), "Move ignored, game is decided");
            return MoveOutcome::Ignored(MoveRejection::GameOver);
        }
        if !board.is_empty(position) {
            debug!("Move ignored, square occupied");
            return MoveOutcome::Ignored(MoveRejection::SquareOccupied(position));
        }

        let player = self.player_to_move();
        let mut next = board.clone();
        next.set(position, Square::Occupied(player));

        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry::new(next, Some(position)));
        self.current_step = self.history.len() - 1;
        self.selected_step = None;

        debug!(%player, discarded, new_step = self.current_step, "Move applied");
        self.debug_check_invariants();

        MoveOutcome::Applied {
            step: self.current_step,
            player,
        }
    }

    /// Moves the step pointer without touching history.
    ///
    /// Returns `false` and changes nothing if `step` is past the end.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            warn!(len = self.history.len(), "Jump outside history ignored");
            return false;
        }
        self.current_step = step;
        self.selected_step = Some(step);
        debug!("Jumped");
        self.debug_check_invariants();
        true
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_ascending = !self.sort_ascending;
        debug!(ascending = self.sort_ascending, "Sort order toggled");
    }

    /// Discards all history and starts over. The sort order is kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        *self = Self::with_sort_order(self.sort_ascending);
        debug!("New game");
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_step].board()
    }

    /// All history entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the current step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The step last jumped to, if no move was made since.
    pub fn selected_step(&self) -> Option<usize> {
        self.selected_step
    }

    /// Whether the move list is shown oldest first.
    pub fn is_sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Player whose turn it is at the current step.
    pub fn player_to_move(&self) -> Player {
        Player::to_move_at(self.current_step)
    }

    /// Winner at the current step.
    pub fn winner(&self) -> Option<WinnerResult> {
        rules::evaluate(self.current_board())
    }

    /// Status at the current step.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        match rules::evaluate(board) {
            Some(result) => GameStatus::Won(result),
            None if rules::is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress {
                next: self.player_to_move(),
            },
        }
    }

    /// Status line, e.g. `Next player: X` or `It's a draw`.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Whether `position` is on the winning line of the current snapshot.
    pub fn is_winning_cell(&self, position: Position) -> bool {
        self.winner().is_some_and(|result| result.contains(position))
    }

    /// Describes the move that produced `step`.
    pub fn move_description(&self, step: usize) -> Option<MoveDescription> {
        self.history
            .get(step)
            .map(|entry| MoveDescription::for_entry(step, entry))
    }

    /// The move list in display order.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let items = self.history.iter().enumerate().map(|(step, entry)| {
            MoveListItem::new(
                step,
                MoveDescription::for_entry(step, entry),
                self.selected_step == Some(step),
            )
        });

        if self.sort_ascending {
            items.collect()
        } else {
            items.rev().collect()
        }
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violations) = HistoryInvariants::check_all(self) {
                panic!("history invariants violated: {:?}", violations);
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
