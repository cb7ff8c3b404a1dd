//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// UCT exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Maximum number of random actions per rollout.
    /// `None` plays every rollout out to the end of the game.
    pub simulation_depth: Option<u32>,

    /// Offer every concrete die outcome as its own child.
    ///
    /// When enabled, die-roll nodes are sampled uniformly over outcomes
    /// instead of through UCT. When disabled, a roll node only has the
    /// engine's placeholder roll, so a single outcome is explored per tree.
    pub simulate_all_dice_outcomes: bool,

    /// Random seed for the agent's RNG.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            simulation_depth: Some(128),
            simulate_all_dice_outcomes: true,
            seed: None,
        }
    }
}

impl MCTSConfig {
    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom rollout cap (`None` = unlimited).
    pub fn with_simulation_depth(mut self, depth: Option<u32>) -> Self {
        self.simulation_depth = depth;
        self
    }

    /// Create a new config with chance-outcome exploration toggled.
    pub fn with_all_dice_outcomes(mut self, enabled: bool) -> Self {
        self.simulate_all_dice_outcomes = enabled;
        self
    }
}
