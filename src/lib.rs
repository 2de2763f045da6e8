//! Fruit Match - a match-3 engine
//!
//! An 8x8 grid of symbols where adjacent swaps that create runs of three
//! or more score points and trigger cascading clear/refill passes. This
//! crate is the engine only: board model, match detection, cascade
//! resolution, the swap commit protocol, and the session state machine
//! with Level and Infinite modes. Rendering, input translation, audio,
//! and durable storage live in collaborator crates that drive
//! [`core::GameEngine`] and drain its events.

pub mod core;
pub mod persist;
pub mod types;

pub use crate::core::{GameEngine, SwapOutcome};
pub use crate::persist::{MemoryStore, ProgressStore, SavedProgress};
