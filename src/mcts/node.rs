//! MCTS node structure.
//!
//! Nodes live in the `MCTSTree` arena and reference each other by `NodeId`.
//! Each node owns its own copy of the game state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A node in the MCTS tree.
///
/// `playouts` counts every rollout that finished at this node or any of its
/// descendants; `wins` counts the ones the searching player won.
#[derive(Clone, Debug)]
pub struct MCTSNode<S, A> {
    /// Parent node (`None` for root).
    pub parent: Option<NodeId>,

    /// Depth in tree (root = 0).
    pub depth: u32,

    /// Rollouts won by the searching player.
    pub wins: u32,

    /// Rollouts backpropagated through this node.
    pub playouts: u32,

    /// This node's private game state.
    pub state: S,

    /// Children reached so far, keyed by the action that leads to them.
    pub children: FxHashMap<A, NodeId>,
}

impl<S, A: Eq + Hash> MCTSNode<S, A> {
    /// Create a child node under `parent`.
    pub fn new(parent: Option<NodeId>, depth: u32, state: S) -> Self {
        Self {
            parent,
            depth,
            wins: 0,
            playouts: 0,
            state,
            children: FxHashMap::default(),
        }
    }

    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self::new(None, 0, state)
    }

    /// Check if this node has been expanded with `action`.
    #[must_use]
    pub fn has_child(&self, action: &A) -> bool {
        self.children.contains_key(action)
    }

    /// Child reached through `action`, if explored.
    #[must_use]
    pub fn child(&self, action: &A) -> Option<NodeId> {
        self.children.get(action).copied()
    }

    /// Mean win rate, or `None` before the first playout.
    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        if self.playouts == 0 {
            None
        } else {
            Some(self.wins as f64 / self.playouts as f64)
        }
    }

    /// Record one finished rollout.
    pub fn record(&mut self, won: bool) {
        self.playouts += 1;
        self.wins += u32::from(won);
    }
}
