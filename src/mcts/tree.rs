//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references. Parent links
//! are plain indices, so backpropagation walks ancestors iteratively.

use std::hash::Hash;

use super::node::{MCTSNode, NodeId};

/// Arena-based MCTS tree for one decision.
///
/// Nodes are only ever appended. The tree is dropped once the decision
/// returns.
#[derive(Clone, Debug)]
pub struct MCTSTree<S, A> {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode<S, A>>,
}

impl<S, A: Eq + Hash> MCTSTree<S, A> {
    /// Create a new tree whose root owns `root_state`.
    pub fn new(root_state: S) -> Self {
        let mut nodes = Vec::with_capacity(1024);
        nodes.push(MCTSNode::root(root_state));
        Self { nodes }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode<S, A> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode<S, A> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MCTSNode<S, A>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty. A tree always has its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MCTSNode<S, A> {
        self.get(self.root())
    }

    /// Record a rollout at `from` and every ancestor up to the root.
    pub fn backpropagate(&mut self, from: NodeId, won: bool) {
        let mut current = Some(from);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.record(won);
            current = node.parent;
        }
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode<S, A>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Deepest node depth in the tree.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }
}
