//! Session state - score, moves, targets, and progression for one play
//!
//! A session is created when a mode is selected and lives until the
//! player leaves. Score resets to 0 at session start; level and high
//! score outlive sessions (the persistence collaborator owns them, the
//! engine reads them at session start and writes them on change).

use crate::core::levels::level_config;
use crate::types::{GameMode, SessionOutcome};

/// Mutable per-session record
#[derive(Debug, Clone)]
pub struct Session {
    mode: GameMode,
    /// 1-based level number; only meaningful in Level mode
    level: u32,
    /// Unused in Infinite mode
    moves_remaining: u32,
    /// Unused in Infinite mode
    target_score: u32,
    score: u32,
    high_score: u32,
}

impl Session {
    /// Start a Level-mode session at the given stored level
    pub fn new_level(level: u32, high_score: u32) -> Self {
        let config = level_config(level);
        Self {
            mode: GameMode::Level,
            level,
            moves_remaining: config.moves,
            target_score: config.target,
            score: 0,
            high_score,
        }
    }

    /// Start an Infinite-mode session with the stored high score
    pub fn new_infinite(high_score: u32) -> Self {
        Self {
            mode: GameMode::Infinite,
            level: 1,
            moves_remaining: 0,
            target_score: 0,
            score: 0,
            high_score,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Whether a new swap may still be accepted (Infinite mode always may)
    pub fn has_moves(&self) -> bool {
        self.mode == GameMode::Infinite || self.moves_remaining > 0
    }

    /// Spend one move on a committed swap. No-op in Infinite mode.
    pub fn spend_move(&mut self) {
        if self.mode == GameMode::Level {
            self.moves_remaining = self.moves_remaining.saturating_sub(1);
        }
    }

    /// Add cascade points. Score only ever grows.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Record a new high score if the current score beats it.
    ///
    /// Only Infinite mode tracks the high score. Returns true when the
    /// value changed, signalling the caller to persist it.
    pub fn record_high_score(&mut self) -> bool {
        if self.mode == GameMode::Infinite && self.score > self.high_score {
            self.high_score = self.score;
            return true;
        }
        false
    }

    /// Evaluate the end condition after a committed swap's cascade has
    /// reached quiescence.
    ///
    /// The comparison against the target happens only at move exhaustion,
    /// never mid-game: the final move may overshoot the target while
    /// later passes are still adding points, and all of them count.
    /// Infinite mode never terminates.
    pub fn outcome_at_exhaustion(&self) -> Option<SessionOutcome> {
        if self.mode != GameMode::Level || self.moves_remaining > 0 {
            return None;
        }
        if self.score >= self.target_score {
            Some(SessionOutcome::LevelComplete)
        } else {
            Some(SessionOutcome::GameOver)
        }
    }

    /// Advance to the next level after a win; the new level's config
    /// applies on the next session start.
    pub fn advance_level(&mut self) {
        self.level += 1;
    }

    #[cfg(test)]
    pub(crate) fn set_moves_remaining(&mut self, moves: u32) {
        self.moves_remaining = moves;
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
