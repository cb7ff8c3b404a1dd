//! Depth search configuration.

use serde::{Deserialize, Serialize};

/// Depth search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSearchConfig {
    /// Ply depth the full game tree is expanded to.
    /// Branching grows fast; keep this small.
    pub termination_depth: u32,

    /// Random seed for determinization and fallback moves.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for DepthSearchConfig {
    fn default() -> Self {
        Self {
            termination_depth: 3,
            seed: None,
        }
    }
}

impl DepthSearchConfig {
    /// Create a new config with custom termination depth.
    pub fn with_termination_depth(mut self, depth: u32) -> Self {
        self.termination_depth = depth;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
