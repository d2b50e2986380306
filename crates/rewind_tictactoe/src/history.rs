//! History entries and the move list built from them.

use super::position::Position;
use super::types::Board;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A board snapshot plus the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct HistoryEntry {
    pub(crate) board: Board,
    pub(crate) last_move: Option<Position>,
}

impl HistoryEntry {
    /// The empty board with no last move.
    pub fn initial() -> Self {
        Self::new(Board::new(), None)
    }

    /// Board after this entry's move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this entry; `None` for the game start.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// How a history step is described in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDescription {
    /// Step 0, before any move.
    GameStart,
    /// A move, with 1-based row and column.
    Move {
        /// History step the move produced.
        step: usize,
        /// Row, 1-based.
        row: usize,
        /// Column, 1-based.
        col: usize,
    },
}

impl MoveDescription {
    pub(crate) fn for_entry(step: usize, entry: &HistoryEntry) -> Self {
        match entry.last_move() {
            None => MoveDescription::GameStart,
            Some(pos) => MoveDescription::Move {
                step,
                row: pos.row() + 1,
                col: pos.col() + 1,
            },
        }
    }
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDescription::GameStart => write!(f, "Go to game start"),
            MoveDescription::Move { step, row, col } => {
                write!(f, "Go to move #{} at row {} col {}", step, row, col)
            }
        }
    }
}

/// One row of the rendered move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct MoveListItem {
    /// History step this row jumps to.
    pub step: usize,
    /// Text shown for the row.
    pub description: MoveDescription,
    /// Whether this is the entry last jumped to.
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_start_text() {
        let desc = MoveDescription::for_entry(0, &HistoryEntry::initial());
        assert_eq!(desc, MoveDescription::GameStart);
        assert_eq!(desc.to_string(), "Go to game start");
    }

    #[test]
    fn test_move_text_is_one_based() {
        let entry = HistoryEntry::new(Board::new(), Some(Position::MiddleRight));
        let desc = MoveDescription::for_entry(3, &entry);
        assert_eq!(desc, MoveDescription::Move { step: 3, row: 2, col: 3 });
        assert_eq!(desc.to_string(), "Go to move #3 at row 2 col 3");
    }
}
