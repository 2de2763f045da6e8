//! Match detection - pure scan of the board for straight runs
//!
//! A match is a maximal horizontal or vertical run of three or more
//! identical symbols. Rows are scanned left to right and columns top to
//! bottom; after a run is recorded the scan resumes past its end, so a
//! run is never re-counted within the same line. Cells matched both
//! horizontally and vertically are de-duplicated by coordinate.
//!
//! Empty cells never match: an empty cell is distinct from every symbol
//! and from other empty cells.

use arrayvec::ArrayVec;

use crate::core::Board;
use crate::types::{Coord, GRID_CELLS, GRID_SIZE, MIN_RUN_LEN};

/// De-duplicated set of matched coordinates from one detection scan.
///
/// Bounded by the board size, so it never allocates.
pub type MatchSet = ArrayVec<Coord, GRID_CELLS>;

/// Scan the board and return every cell participating in a run of
/// `MIN_RUN_LEN` or more. Returns an empty set on a quiescent board.
pub fn detect_matches(board: &Board) -> MatchSet {
    let mut matched = MatchSet::new();
    // One bit per flat cell index; dedups the row/column unions
    let mut seen: u64 = 0;

    let mut record = |matched: &mut MatchSet, coord: Coord| {
        let bit = 1u64 << (coord.row as usize * GRID_SIZE as usize + coord.col as usize);
        if seen & bit == 0 {
            seen |= bit;
            matched.push(coord);
        }
    };

    // Horizontal runs
    for row in 0..GRID_SIZE {
        let mut col = 0;
        while col + 2 < GRID_SIZE {
            let run_len = run_length(board, row, col, 0, 1);
            if run_len >= MIN_RUN_LEN as u8 {
                for i in 0..run_len {
                    record(&mut matched, Coord::new(row, col + i));
                }
                // Resume past the run; no overlapping re-scan
                col += run_len;
            } else {
                col += 1;
            }
        }
    }

    // Vertical runs
    for col in 0..GRID_SIZE {
        let mut row = 0;
        while row + 2 < GRID_SIZE {
            let run_len = run_length(board, row, col, 1, 0);
            if run_len >= MIN_RUN_LEN as u8 {
                for i in 0..run_len {
                    record(&mut matched, Coord::new(row + i, col));
                }
                row += run_len;
            } else {
                row += 1;
            }
        }
    }

    matched
}

/// Length of the run of identical symbols starting at (row, col) and
/// extending by (dr, dc). Returns 0 when the start cell is empty.
fn run_length(board: &Board, row: u8, col: u8, dr: u8, dc: u8) -> u8 {
    let Some(Some(symbol)) = board.get(Coord::new(row, col)) else {
        return 0;
    };

    let mut len: u8 = 1;
    loop {
        let next = Coord::new(row + dr * len, col + dc * len);
        match board.get(next) {
            Some(Some(s)) if s == symbol => len += 1,
            _ => break,
        }
    }
    len
}
