//! Depth search statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one depth-search decision.
///
/// The node counter is scoped to a single decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthStats {
    /// Nodes created, root included.
    pub node_count: u64,

    /// Leaves evaluated with the heuristic.
    pub leaf_count: u64,

    /// Backed-up score of the root.
    pub root_score: Option<i64>,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}
