//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one MCTS decision.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Total iterations performed.
    pub iterations: u32,

    /// Nodes expanded (added to tree).
    pub nodes_expanded: u32,

    /// Simulations (rollouts) performed.
    pub simulations: u32,

    /// Maximum tree depth reached during search.
    pub max_depth: u32,

    /// Playouts recorded at the root.
    pub root_playouts: u32,

    /// Wins recorded at the root.
    pub root_wins: u32,

    /// Wins recorded at the chosen child.
    pub chosen_wins: u32,

    /// Playouts recorded at the chosen child.
    pub chosen_playouts: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate iterations per second.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Q(s,a) of the chosen action.
    #[must_use]
    pub fn chosen_q(&self) -> f64 {
        if self.chosen_playouts == 0 {
            0.0
        } else {
            self.chosen_wins as f64 / self.chosen_playouts as f64
        }
    }
}
