//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

use serde::{Deserialize, Serialize};

/// Board edge length in cells (the board is square)
pub const GRID_SIZE: u8 = 8;

/// Total number of cells on the board
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Number of distinct symbols in the alphabet
pub const SYMBOL_COUNT: usize = 7;

/// Minimum run length that counts as a match
pub const MIN_RUN_LEN: usize = 3;

/// Points awarded per matched cell in a cascade pass
pub const POINTS_PER_CELL: u32 = 10;

/// Presentation pacing (milliseconds). The engine itself is synchronous;
/// these are the reference delays a renderer inserts between replayed steps.
pub const SWAP_SETTLE_MS: u32 = 300;
pub const CASCADE_CLEAR_MS: u32 = 500;
pub const CASCADE_REFILL_MS: u32 = 300;
pub const MESSAGE_DISPLAY_MS: u32 = 2000;

/// Tile symbol kinds (the classic fruit set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Apple,
    Orange,
    Lemon,
    Grape,
    Strawberry,
    Cherry,
    Watermelon,
}

/// All symbols in wire-code order
pub const SYMBOLS: [Symbol; SYMBOL_COUNT] = [
    Symbol::Apple,
    Symbol::Orange,
    Symbol::Lemon,
    Symbol::Grape,
    Symbol::Strawberry,
    Symbol::Cherry,
    Symbol::Watermelon,
];

impl Symbol {
    /// Wire code for snapshots (1-based; 0 means empty)
    pub fn code(&self) -> u8 {
        match self {
            Symbol::Apple => 1,
            Symbol::Orange => 2,
            Symbol::Lemon => 3,
            Symbol::Grape => 4,
            Symbol::Strawberry => 5,
            Symbol::Cherry => 6,
            Symbol::Watermelon => 7,
        }
    }

    /// Parse a wire code back into a symbol (0 and out-of-range are empty)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Symbol::Apple),
            2 => Some(Symbol::Orange),
            3 => Some(Symbol::Lemon),
            4 => Some(Symbol::Grape),
            5 => Some(Symbol::Strawberry),
            6 => Some(Symbol::Cherry),
            7 => Some(Symbol::Watermelon),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Apple => "apple",
            Symbol::Orange => "orange",
            Symbol::Lemon => "lemon",
            Symbol::Grape => "grape",
            Symbol::Strawberry => "strawberry",
            Symbol::Cherry => "cherry",
            Symbol::Watermelon => "watermelon",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with a symbol)
pub type Cell = Option<Symbol>;

/// A (row, col) board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on the board
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Whether `other` is orthogonally adjacent (Manhattan distance exactly 1)
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr + dc == 1
    }
}

/// Game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Level,
    Infinite,
}

impl GameMode {
    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "level" => Some(GameMode::Level),
            "infinite" => Some(GameMode::Infinite),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Level => "level",
            GameMode::Infinite => "infinite",
        }
    }
}

/// Session lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    SelectingMode,
    Playing,
    LevelComplete,
    GameOver,
}

/// How a completed session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    LevelComplete,
    GameOver,
}

/// Serializes swap/shuffle requests against the multi-step cascade sequence.
/// While `Busy`, new requests are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingState {
    Idle,
    Busy,
}

/// 8x8 wire-coded grid snapshot (0 = empty, 1..=7 = symbol codes)
pub type BoardGrid = [[u8; GRID_SIZE as usize]; GRID_SIZE as usize];

/// Events emitted toward the rendering collaborator.
///
/// The engine queues these during each public operation; the collaborator
/// drains them afterwards and replays with its own pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BoardChanged(BoardGrid),
    CellsMatched { cells: Vec<Coord>, points: u32 },
    ScoreChanged(u32),
    MovesChanged(u32),
    HighScoreChanged(u32),
    Message(String),
    SessionEnded {
        outcome: SessionOutcome,
        final_score: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_code_roundtrip() {
        for symbol in SYMBOLS {
            assert_eq!(Symbol::from_code(symbol.code()), Some(symbol));
        }
        assert_eq!(Symbol::from_code(0), None);
        assert_eq!(Symbol::from_code(8), None);
    }

    #[test]
    fn test_coord_adjacency() {
        let center = Coord::new(3, 3);
        assert!(center.is_adjacent(&Coord::new(2, 3)));
        assert!(center.is_adjacent(&Coord::new(4, 3)));
        assert!(center.is_adjacent(&Coord::new(3, 2)));
        assert!(center.is_adjacent(&Coord::new(3, 4)));

        // Identical, diagonal, and distant cells are not adjacent
        assert!(!center.is_adjacent(&Coord::new(3, 3)));
        assert!(!center.is_adjacent(&Coord::new(2, 2)));
        assert!(!center.is_adjacent(&Coord::new(3, 5)));
    }

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(0, 0).in_bounds());
        assert!(Coord::new(7, 7).in_bounds());
        assert!(!Coord::new(8, 0).in_bounds());
        assert!(!Coord::new(0, 8).in_bounds());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(GameMode::from_str("Level"), Some(GameMode::Level));
        assert_eq!(GameMode::from_str("infinite"), Some(GameMode::Infinite));
        assert_eq!(GameMode::from_str("endless"), None);
    }
}
