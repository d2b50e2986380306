//! First-class invariants over the move history.
//!
//! Invariants are logical properties of a [`GameState`] that every sequence
//! of operations must preserve. The game checks them after each mutation in
//! debug builds; tests check them directly.

use crate::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod alternating_marks;
pub mod history_shape;
pub mod no_move_after_win;
pub mod single_cell_delta;

pub use alternating_marks::AlternatingMarksInvariant;
pub use history_shape::{NonEmptyHistoryInvariant, StepInRangeInvariant};
pub use no_move_after_win::NoMoveAfterWinInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    NonEmptyHistoryInvariant,
    StepInRangeInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarksInvariant,
    NoMoveAfterWinInvariant,
);

/// Checks every history invariant against `game`.
pub fn check_history(game: &GameState) -> Result<(), Vec<InvariantViolation>> {
    HistoryInvariants::check_all(game)
}
