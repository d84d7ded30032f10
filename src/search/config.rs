//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default lookahead in plies, used by [`best_move`].
    /// A depth of 0 is treated as 1.
    ///
    /// [`best_move`]: super::MinimaxSearch::best_move
    pub depth: u32,

    /// Random seed for tie-breaking among equally good moves.
    /// Same seed produces the same choices.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4, seed: 42 }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
