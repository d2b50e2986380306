//! Each entry changes exactly one previously empty square.

use super::Invariant;
use crate::{GameState, Position, Square};

/// Invariant: every entry after the first differs from its predecessor in
/// exactly the square named by its last move, which was empty before.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(moved) = pair[1].last_move() else {
                return false;
            };
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|&pos| before.get(pos) != after.get(pos))
                .collect();

            changed == [moved]
                && before.get(moved) == Square::Empty
                && after.get(moved) != Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly one empty square"
    }
}
