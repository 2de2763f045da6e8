//! Persistence collaborator interface
//!
//! The engine owns no storage. A `ProgressStore` supplies the saved
//! level and high score at session start and receives writes the moment
//! either advances. Store failures are never fatal to play: the engine
//! logs them and keeps the in-memory values.

use anyhow::Result;

/// Durable player progress: current level and best Infinite-mode score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SavedProgress {
    pub level: u32,
    pub high_score: u32,
}

/// Abstract store for player progress.
///
/// Implementations map these to whatever backing the host has
/// (key-value store, file, browser storage). The engine calls `load`
/// once at engine construction, `save_level` on each level advance, and
/// `save_high_score` each time the high score is beaten.
pub trait ProgressStore {
    fn load(&mut self) -> Result<SavedProgress>;
    fn save_level(&mut self, level: u32) -> Result<()>;
    fn save_high_score(&mut self, high_score: u32) -> Result<()>;
}

/// In-memory store; the default when the host provides nothing durable
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    progress: SavedProgress,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            progress: SavedProgress {
                level: 1,
                high_score: 0,
            },
        }
    }

    /// Seed the store with existing progress
    pub fn with_progress(progress: SavedProgress) -> Self {
        Self { progress }
    }
}

impl ProgressStore for MemoryStore {
    fn load(&mut self) -> Result<SavedProgress> {
        Ok(self.progress)
    }

    fn save_level(&mut self, level: u32) -> Result<()> {
        self.progress.level = level;
        Ok(())
    }

    fn save_high_score(&mut self, high_score: u32) -> Result<()> {
        self.progress.high_score = high_score;
        Ok(())
    }
}
