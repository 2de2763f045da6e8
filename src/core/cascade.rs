//! Cascade resolution - repeated clear/compact/refill cycles
//!
//! One pass clears every currently matched cell, applies gravity to each
//! column, then refills the whole grid in a single sweep. Refilling after
//! all columns have compacted means symbols dropped in by the refill can
//! never move again within the same pass. Passes repeat until detection
//! comes back empty; the run always terminates because a pass without
//! matches ends the loop and the grid is finite.

use serde::{Deserialize, Serialize};

use crate::core::matches::detect_matches;
use crate::core::rng::SimpleRng;
use crate::core::Board;
use crate::types::{Coord, POINTS_PER_CELL};

/// One resolved cascade step: the cells cleared and the points they
/// scored. A renderer replays these with its own pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadePass {
    pub cells: Vec<Coord>,
    pub points: u32,
}

/// Run one resolution step. Returns `None` when the board is quiescent.
///
/// Matched cells score `POINTS_PER_CELL` each, so a run of 5 outscores
/// two runs of 3. Cascade passes are the only source of points.
pub fn resolve_pass(board: &mut Board, rng: &mut SimpleRng) -> Option<CascadePass> {
    let matched = detect_matches(board);
    if matched.is_empty() {
        return None;
    }

    let points = POINTS_PER_CELL * matched.len() as u32;
    board.clear_cells(&matched);
    board.compact_all();
    board.refill_empties(rng);

    Some(CascadePass {
        cells: matched.to_vec(),
        points,
    })
}

/// Resolve until no further matches exist, collecting every pass in order.
pub fn resolve_to_quiescence(board: &mut Board, rng: &mut SimpleRng) -> Vec<CascadePass> {
    let mut passes = Vec::new();
    while let Some(pass) = resolve_pass(board, rng) {
        passes.push(pass);
    }
    passes
}

/// Silently scrub a board of pre-existing matches (no scoring).
/// Used at board initialization. Returns the number of passes taken.
pub fn settle(board: &mut Board, rng: &mut SimpleRng) -> usize {
    let mut passes = 0;
    while resolve_pass(board, rng).is_some() {
        passes += 1;
    }
    passes
}

/// Build a freshly randomized board with zero pre-existing matches.
/// No guarantee a legal move exists on it.
pub fn initialize_board(rng: &mut SimpleRng) -> Board {
    let mut board = Board::new();
    board.fill_random(rng);
    settle(&mut board, rng);
    board
}
