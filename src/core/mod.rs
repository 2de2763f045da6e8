//! Core module - pure game logic with no external dependencies
//!
//! This module contains the board, match detection, cascade resolution,
//! and session rules. It has zero dependencies on UI, audio, or I/O.

pub mod board;
pub mod cascade;
pub mod engine;
pub mod levels;
pub mod matches;
pub mod rng;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use cascade::{resolve_pass, resolve_to_quiescence, CascadePass};
pub use engine::{GameEngine, SwapOutcome};
pub use matches::{detect_matches, MatchSet};
pub use rng::SimpleRng;
pub use session::Session;
pub use snapshot::GameSnapshot;
