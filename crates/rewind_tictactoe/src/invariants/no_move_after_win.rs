//! Nothing is appended after a decided snapshot.

use super::Invariant;
use crate::{GameState, rules};

/// Invariant: only the last history entry may hold a winning line.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameState> for NoMoveAfterWinInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|entry| rules::evaluate(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No move follows a win"
    }
}
