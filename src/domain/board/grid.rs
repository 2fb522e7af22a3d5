//! The 3x3 board value object.

use serde::{Deserialize, Serialize};

use super::evaluator;
use super::{Cell, Symbol, CELL_COUNT};
use crate::domain::foundation::ValidationError;

/// Nine cells in row-major order (rows 0-2, 3-5, 6-8).
///
/// # Invariants
///
/// - X count equals O count, or exceeds it by exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "[Cell; CELL_COUNT]", into = "[Cell; CELL_COUNT]")]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a board from stored cells, checking the mark-count invariant.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if O has more marks than X, or X leads by more than one
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self, ValidationError> {
        let xs = cells.iter().filter(|c| **c == Cell::X).count();
        let os = cells.iter().filter(|c| **c == Cell::O).count();
        if xs != os && xs != os + 1 {
            return Err(ValidationError::invalid_format(
                "board",
                format!("{} X marks and {} O marks cannot occur in play", xs, os),
            ));
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Moves left before the board is full.
    pub fn remaining_moves(&self) -> usize {
        CELL_COUNT - self.occupied()
    }

    pub fn winner(&self) -> Option<Symbol> {
        evaluator::check_winner(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        evaluator::is_full(&self.cells)
    }

    /// Writes `symbol` into an empty, in-range cell.
    ///
    /// Range and occupancy are checked by the game before calling this.
    pub(crate) fn place(&mut self, index: usize, symbol: Symbol) {
        debug_assert!(self.cells[index].is_empty());
        self.cells[index] = Cell::from(symbol);
    }
}

impl TryFrom<[Cell; CELL_COUNT]> for Board {
    type Error = ValidationError;

    fn try_from(cells: [Cell; CELL_COUNT]) -> Result<Self, Self::Error> {
        Board::from_cells(cells)
    }
}

impl From<Board> for [Cell; CELL_COUNT] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied(), 0);
        assert_eq!(board.remaining_moves(), 9);
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn place_fills_cell() {
        let mut board = Board::new();
        board.place(4, Symbol::X);
        assert_eq!(board.get(4), Some(Cell::X));
        assert_eq!(board.remaining_moves(), 8);
    }

    #[test]
    fn get_out_of_range_is_none() {
        assert_eq!(Board::new().get(9), None);
    }

    #[test]
    fn from_cells_rejects_o_ahead_of_x() {
        let mut cells = [Cell::Empty; CELL_COUNT];
        cells[0] = Cell::O;
        assert!(Board::from_cells(cells).is_err());
    }

    #[test]
    fn from_cells_rejects_x_two_ahead() {
        let mut cells = [Cell::Empty; CELL_COUNT];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        assert!(Board::from_cells(cells).is_err());
    }

    #[test]
    fn serializes_as_cell_array() {
        let mut board = Board::new();
        board.place(0, Symbol::X);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"["X","","","","","","","",""]"#);
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn deserializing_impossible_board_fails() {
        let json = r#"["O","","","","","","","",""]"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }
}
