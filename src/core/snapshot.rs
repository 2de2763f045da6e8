//! Snapshots handed to the rendering collaborator
//!
//! The renderer owns its own index mapping; the engine hands it a
//! coordinate-addressed, wire-coded copy of the grid plus the session
//! numbers, never references into live state.

use serde::{Deserialize, Serialize};

use crate::core::Board;
use crate::types::{BoardGrid, Coord, GameMode, GamePhase, GRID_SIZE};

/// Wire-code the board into an 8x8 grid (0 = empty, 1..=7 = symbols)
pub fn board_grid(board: &Board) -> BoardGrid {
    let mut out: BoardGrid = [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize];
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if let Some(Some(symbol)) = board.get(Coord::new(row, col)) {
                out[row as usize][col as usize] = symbol.code();
            }
        }
    }
    out
}

/// Full engine state snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub phase: GamePhase,
    /// None while no mode has been selected
    pub mode: Option<GameMode>,
    pub level: u32,
    pub moves_remaining: u32,
    pub target_score: u32,
    pub score: u32,
    pub high_score: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize],
            phase: GamePhase::SelectingMode,
            mode: None,
            level: 1,
            moves_remaining: 0,
            target_score: 0,
            score: 0,
            high_score: 0,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    #[test]
    fn test_board_grid_codes() {
        let mut board = Board::new();
        board.set(Coord::new(0, 0), Some(Symbol::Apple));
        board.set(Coord::new(7, 7), Some(Symbol::Watermelon));

        let grid = board_grid(&board);
        assert_eq!(grid[0][0], 1);
        assert_eq!(grid[7][7], 7);
        assert_eq!(grid[3][3], 0);
    }

    #[test]
    fn test_default_snapshot_not_playable() {
        let snapshot = GameSnapshot::default();
        assert!(!snapshot.playable());
        assert_eq!(snapshot.mode, None);
    }
}
