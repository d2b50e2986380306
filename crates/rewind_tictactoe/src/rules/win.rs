//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in the order they are checked.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who won and which three squares did it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinnerResult {
    player: Player,
    line: [Position; 3],
}

impl WinnerResult {
    /// The winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The three positions of the winning line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// The winning line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether the position is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Evaluates a board for a winner.
///
/// Returns the first line in [`WINNING_LINES`] order whose three squares
/// hold the same player, or `None`. Boards with more than one completed
/// line (never reachable through play) resolve to the earliest line.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<WinnerResult> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a))
            .then_some(WinnerResult { player, line })
    })
}
