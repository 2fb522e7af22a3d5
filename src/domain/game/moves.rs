//! Move records and move outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::board::Symbol;
use crate::domain::foundation::UserId;

/// One applied move: the mark placed and where.
///
/// Move records are append-only; the history is never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub symbol: Symbol,
    pub cell: u8,
}

impl Move {
    pub fn new(symbol: Symbol, cell: u8) -> Self {
        Self { symbol, cell }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.symbol, self.cell)
    }
}

/// What an accepted move did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No line and free cells remain; the other player is up.
    Continued { next_to_move: UserId },
    /// The mover completed a line.
    Won { winner: UserId, loser: UserId },
    /// The board filled up with no line.
    Drawn,
}

impl MoveOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continued { .. })
    }
}
