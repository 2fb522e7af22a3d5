//! Game domain module.
//!
//! The game aggregate is the state machine for a single match: creation,
//! move validation, turn alternation and termination (win, draw, cancel).
//!
//! # Outcomes
//!
//! - `MoveOutcome::Continued` - the other player is up
//! - `MoveOutcome::Won` - the mover completed a line
//! - `MoveOutcome::Drawn` - the board filled with no line

mod aggregate;
mod errors;
mod moves;
mod statistics;
mod status;

pub use aggregate::Game;
pub use errors::GameError;
pub use moves::{Move, MoveOutcome};
pub use statistics::average_remaining_moves;
pub use status::GameStatus;
