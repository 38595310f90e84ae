//! Game configuration types.
//!
//! - `TieBreak`: how equal-rank combat is resolved
//! - `GameConfig`: board dimensions, setup seed and tie-break policy

use serde::{Deserialize, Serialize};

/// Resolution of an attack between two pieces of equal rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieBreak {
    /// Both pieces are removed from the board.
    #[default]
    MutualDestruction,
    /// The attacker survives and occupies the destination, exactly as if it
    /// had the higher rank.
    EqualRankAttackerWins,
}

/// Complete game configuration.
///
/// ```
/// use tactego::core::{GameConfig, TieBreak};
///
/// let config = GameConfig::new(6, 4)
///     .with_seed(99)
///     .with_tie_break(TieBreak::EqualRankAttackerWins);
///
/// assert_eq!(config.max_area(), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows.
    pub length: usize,

    /// Number of columns.
    pub width: usize,

    /// Seed for the setup shuffle.
    pub seed: u64,

    /// Equal-rank combat policy.
    pub tie_break: TieBreak,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

impl GameConfig {
    /// Create a configuration for a `length × width` board.
    pub fn new(length: usize, width: usize) -> Self {
        Self {
            length,
            width,
            seed: 0,
            tie_break: TieBreak::default(),
        }
    }

    /// Set the setup seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the equal-rank combat policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Cells available to each side: half the board, rounded down.
    ///
    /// Saturates for dimensions whose product overflows; setup rejects those.
    #[must_use]
    pub fn max_area(&self) -> usize {
        self.length.saturating_mul(self.width) / 2
    }
}
