//! Board evaluation: pure functions over the nine cells.
//!
//! Neither function has side effects. Callers must check for a winner
//! before checking for a full board: the last move can complete a line
//! and fill the board at the same time, and the win takes precedence.

use super::{Cell, Symbol, CELL_COUNT};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the symbol filling any complete line, if there is one.
///
/// At most one symbol can own a line, so the first match is the answer.
pub fn check_winner(cells: &[Cell; CELL_COUNT]) -> Option<Symbol> {
    LINES.iter().find_map(|&[a, b, c]| {
        let symbol = cells[a].symbol()?;
        (cells[a] == cells[b] && cells[b] == cells[c]).then_some(symbol)
    })
}

/// True iff no cell is empty.
pub fn is_full(cells: &[Cell; CELL_COUNT]) -> bool {
    cells.iter().all(|cell| !cell.is_empty())
}
