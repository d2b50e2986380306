//! Tic-tac-toe with a navigable move history.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: pure functions over a single board ([`rules::evaluate`],
//!   [`rules::is_draw`])
//! - **Game**: [`GameState`] owns the history and the step pointer and
//!   derives everything else on demand
//! - **Invariants**: properties of the history checked after every mutation
//!   in debug builds
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Position};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     game.apply_move(pos);
//! }
//! assert_eq!(game.status_text(), "Next player: O");
//!
//! // Go back to the first move and branch.
//! game.jump_to(1);
//! game.apply_move(Position::BottomRight);
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use game::{GameState, GameStatus, MoveOutcome, MoveRejection};
pub use history::{HistoryEntry, MoveDescription, MoveListItem};
pub use position::Position;
pub use rules::WinnerResult;
pub use types::{Board, Player, Square};
