//! Board module - manages the match grid
//!
//! The board is an 8x8 grid where each cell holds a symbol or is empty.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left.
//! Cells are only empty transiently, between a clear and the refill that
//! follows it inside a cascade pass.

use crate::core::rng::SimpleRng;
use crate::types::{Cell, Coord, GRID_CELLS, GRID_SIZE};

/// The match grid - 8 rows x 8 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; GRID_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(coord: Coord) -> Option<usize> {
        if !coord.in_bounds() {
            return None;
        }
        Some((coord.row as usize) * (GRID_SIZE as usize) + (coord.col as usize))
    }

    /// Get cell at a coordinate
    /// Returns None if out of bounds
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        Self::index(coord).map(|idx| self.cells[idx])
    }

    /// Set cell at a coordinate
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match Self::index(coord) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether the coordinate is in bounds and holds a symbol
    pub fn is_occupied(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Some(_)))
    }

    /// Swap the contents of two cells in place.
    ///
    /// The swap is its own inverse: calling this again with the same
    /// arguments restores the previous state exactly. Returns false and
    /// leaves the board untouched if either coordinate is out of bounds.
    pub fn swap(&mut self, a: Coord, b: Coord) -> bool {
        match (Self::index(a), Self::index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Set each given cell to empty
    pub fn clear_cells(&mut self, cells: &[Coord]) {
        for &coord in cells {
            if let Some(idx) = Self::index(coord) {
                self.cells[idx] = None;
            }
        }
    }

    /// Move all symbols in one column downward, preserving relative order,
    /// leaving empty cells at the top - simulates gravity.
    pub fn compact_column(&mut self, col: u8) {
        if col >= GRID_SIZE {
            return;
        }

        // Two-pointer scan from the bottom: write_row trails over empties
        let size = GRID_SIZE as usize;
        let mut write_row = size;
        for read_row in (0..size).rev() {
            let read_idx = read_row * size + col as usize;
            if self.cells[read_idx].is_some() {
                write_row -= 1;
                if write_row != read_row {
                    let write_idx = write_row * size + col as usize;
                    self.cells[write_idx] = self.cells[read_idx];
                    self.cells[read_idx] = None;
                }
            }
        }
    }

    /// Apply gravity to every column
    pub fn compact_all(&mut self) {
        for col in 0..GRID_SIZE {
            self.compact_column(col);
        }
    }

    /// Fill every remaining empty cell with a fresh random symbol
    pub fn refill_empties(&mut self, rng: &mut SimpleRng) {
        for cell in &mut self.cells {
            if cell.is_none() {
                *cell = Some(rng.next_symbol());
            }
        }
    }

    /// Fill the whole board with independent random symbols
    pub fn fill_random(&mut self, rng: &mut SimpleRng) {
        for cell in &mut self.cells {
            *cell = Some(rng.next_symbol());
        }
    }

    /// Re-permute all symbols across the grid with an unbiased
    /// Fisher-Yates shuffle. Bypasses match detection entirely.
    pub fn shuffle(&mut self, rng: &mut SimpleRng) {
        rng.shuffle(&mut self.cells);
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Create from a 2D vector for testing (converts to flat array)
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        assert_eq!(rows.len(), GRID_SIZE as usize);
        assert!(rows.iter().all(|row| row.len() == GRID_SIZE as usize));

        let mut flat = [None; GRID_CELLS];
        for (row, cols) in rows.iter().enumerate() {
            for (col, cell) in cols.iter().enumerate() {
                flat[row * GRID_SIZE as usize + col] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to a 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        let size = GRID_SIZE as usize;
        (0..size)
            .map(|row| {
                let start = row * size;
                self.cells[start..start + size].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(Coord::new(0, 0)), Some(0));
        assert_eq!(Board::index(Coord::new(0, 7)), Some(7));
        assert_eq!(Board::index(Coord::new(1, 0)), Some(8));
        assert_eq!(Board::index(Coord::new(7, 7)), Some(63));
        assert_eq!(Board::index(Coord::new(8, 0)), None);
        assert_eq!(Board::index(Coord::new(0, 8)), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(Coord::new(0, 0), Some(Symbol::Apple));
        board.set(Coord::new(5, 2), Some(Symbol::Cherry));

        assert_eq!(board.get(Coord::new(0, 0)), Some(Some(Symbol::Apple)));
        assert_eq!(board.get(Coord::new(5, 2)), Some(Some(Symbol::Cherry)));

        // Verify internal layout
        assert_eq!(board.cells[0], Some(Symbol::Apple));
        assert_eq!(board.cells[5 * 8 + 2], Some(Symbol::Cherry));
    }

    #[test]
    fn test_swap_is_self_inverse() {
        let mut board = Board::new();
        board.set(Coord::new(2, 3), Some(Symbol::Lemon));
        board.set(Coord::new(2, 4), Some(Symbol::Grape));
        let before = board.clone();

        let a = Coord::new(2, 3);
        let b = Coord::new(2, 4);
        assert!(board.swap(a, b));
        assert_eq!(board.get(a), Some(Some(Symbol::Grape)));
        assert_eq!(board.get(b), Some(Some(Symbol::Lemon)));

        assert!(board.swap(a, b));
        assert_eq!(board, before);
    }

    #[test]
    fn test_swap_out_of_bounds() {
        let mut board = Board::new();
        board.set(Coord::new(0, 7), Some(Symbol::Apple));
        let before = board.clone();

        assert!(!board.swap(Coord::new(0, 7), Coord::new(0, 8)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_compact_column_preserves_order() {
        let mut board = Board::new();
        // Column 3, top to bottom: Apple, gap, Orange, gap, Lemon
        board.set(Coord::new(0, 3), Some(Symbol::Apple));
        board.set(Coord::new(2, 3), Some(Symbol::Orange));
        board.set(Coord::new(4, 3), Some(Symbol::Lemon));

        board.compact_column(3);

        // Symbols settle at the bottom in the same relative order
        assert_eq!(board.get(Coord::new(7, 3)), Some(Some(Symbol::Lemon)));
        assert_eq!(board.get(Coord::new(6, 3)), Some(Some(Symbol::Orange)));
        assert_eq!(board.get(Coord::new(5, 3)), Some(Some(Symbol::Apple)));
        for row in 0..5 {
            assert_eq!(board.get(Coord::new(row, 3)), Some(None));
        }
    }

    #[test]
    fn test_compact_column_leaves_other_columns() {
        let mut board = Board::new();
        board.set(Coord::new(0, 2), Some(Symbol::Cherry));
        board.set(Coord::new(1, 4), Some(Symbol::Grape));

        board.compact_column(3);

        assert_eq!(board.get(Coord::new(0, 2)), Some(Some(Symbol::Cherry)));
        assert_eq!(board.get(Coord::new(1, 4)), Some(Some(Symbol::Grape)));
    }

    #[test]
    fn test_refill_fills_only_empties() {
        let mut board = Board::new();
        board.set(Coord::new(7, 0), Some(Symbol::Watermelon));

        let mut rng = SimpleRng::new(5);
        board.refill_empties(&mut rng);

        assert_eq!(board.empty_count(), 0);
        assert_eq!(board.get(Coord::new(7, 0)), Some(Some(Symbol::Watermelon)));
    }

    #[test]
    fn test_shuffle_preserves_symbol_multiset() {
        let mut rng = SimpleRng::new(11);
        let mut board = Board::new();
        board.fill_random(&mut rng);

        let mut before: Vec<Cell> = board.cells().to_vec();
        board.shuffle(&mut rng);
        let mut after: Vec<Cell> = board.cells().to_vec();

        let key = |c: &Cell| c.map(|s| s.code()).unwrap_or(0);
        before.sort_by_key(key);
        after.sort_by_key(key);
        assert_eq!(before, after);
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let mut rows = vec![vec![None; 8]; 8];
        rows[3][1] = Some(Symbol::Strawberry);
        rows[6][7] = Some(Symbol::Orange);

        let board = Board::from_rows(rows.clone());
        assert_eq!(board.to_rows(), rows);
    }
}
