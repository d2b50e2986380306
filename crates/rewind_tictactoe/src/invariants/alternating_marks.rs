//! Marks alternate X, O, X, ... along the history.

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: the mark placed by entry `k` belongs to the player to move at
/// step `k - 1`, so X fills odd entries and O fills even ones.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| match entry.last_move() {
                Some(pos) => entry.board().get(pos) == Square::Occupied(Player::to_move_at(step - 1)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}
