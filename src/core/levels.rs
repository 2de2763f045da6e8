//! Level configuration - fixed table for early levels, deterministic
//! extrapolation beyond it
//!
//! Levels are 1-based. The first ten levels come from a hand-tuned table;
//! any level past the table gets `moves = max(12, 20 - level/2)` and
//! `target = 500 + (level - 1) * 300`, so a lookup can never fail.

/// Rough difficulty label attached to each level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Moves allowed and score target for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConfig {
    pub moves: u32,
    pub target: u32,
    pub difficulty: Difficulty,
}

/// Hand-tuned configurations for levels 1-10
const LEVEL_TABLE: [LevelConfig; 10] = [
    LevelConfig { moves: 20, target: 500, difficulty: Difficulty::Easy },
    LevelConfig { moves: 20, target: 700, difficulty: Difficulty::Easy },
    LevelConfig { moves: 18, target: 900, difficulty: Difficulty::Medium },
    LevelConfig { moves: 18, target: 1100, difficulty: Difficulty::Medium },
    LevelConfig { moves: 16, target: 1300, difficulty: Difficulty::Medium },
    LevelConfig { moves: 16, target: 1500, difficulty: Difficulty::Hard },
    LevelConfig { moves: 15, target: 1700, difficulty: Difficulty::Hard },
    LevelConfig { moves: 15, target: 2000, difficulty: Difficulty::Hard },
    LevelConfig { moves: 14, target: 2300, difficulty: Difficulty::Expert },
    LevelConfig { moves: 14, target: 2600, difficulty: Difficulty::Expert },
];

/// Minimum move allowance for extrapolated levels
const MOVES_FLOOR: u32 = 12;

/// Look up the configuration for a 1-based level number.
///
/// Levels 0 and 1 both map to the first table entry; levels beyond the
/// table are extrapolated. There is no failure path.
pub fn level_config(level: u32) -> LevelConfig {
    let index = level.saturating_sub(1) as usize;
    if index < LEVEL_TABLE.len() {
        return LEVEL_TABLE[index];
    }

    let moves = (20u32.saturating_sub(level / 2)).max(MOVES_FLOOR);
    let target = 500 + (level - 1) * 300;
    LevelConfig {
        moves,
        target,
        difficulty: Difficulty::Expert,
    }
}
