//! Board domain module.
//!
//! The 3x3 board, its cell contents, and the pure evaluation functions
//! (`check_winner`, `is_full`) used by the game state machine.

mod evaluator;
mod grid;
mod symbol;

pub use evaluator::{check_winner, is_full, LINES};
pub use grid::Board;
pub use symbol::{Cell, Symbol};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;
