//! Shape invariants: history is never empty and the step points into it.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: history has at least one entry and entry 0 is the empty board.
pub struct NonEmptyHistoryInvariant;

impl Invariant<GameState> for NonEmptyHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        match game.history().first() {
            Some(start) => start.last_move().is_none() && *start.board() == Board::new(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts with the empty board and no last move"
    }
}

/// Invariant: the current step indexes an existing entry.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step is within history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_game_holds() {
        let game = GameState::new();
        assert!(NonEmptyHistoryInvariant::holds(&game));
        assert!(StepInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!NonEmptyHistoryInvariant::holds(&game));
        assert!(!StepInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_step_past_end_violates() {
        let mut game = GameState::new();
        game.apply_move(Position::Center);
        game.current_step = 2;
        assert!(!StepInRangeInvariant::holds(&game));
    }
}
