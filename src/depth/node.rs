//! Exhaustively expanded search node.

/// A node in the depth-search tree.
///
/// Either a leaf (termination depth or terminal state) or has exactly one
/// child per legal action, kept in the rule engine's action order.
#[derive(Clone, Debug)]
pub struct DepthSearchNode<S, A> {
    /// This node's private game state.
    pub state: S,

    /// Depth in tree (root = 0).
    pub depth: u32,

    /// Children, one per legal action.
    pub children: Vec<(A, DepthSearchNode<S, A>)>,

    /// Minimax score, set by evaluation.
    pub score: Option<i64>,
}

impl<S, A> DepthSearchNode<S, A> {
    /// Create an unexpanded node.
    pub fn new(state: S, depth: u32) -> Self {
        Self {
            state,
            depth,
            children: Vec::new(),
            score: None,
        }
    }

    /// Check if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Child reached through `action`.
    pub fn child(&self, action: &A) -> Option<&DepthSearchNode<S, A>>
    where
        A: PartialEq,
    {
        self.children
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, node)| node)
    }

    /// Number of nodes in this subtree, including this one.
    #[must_use]
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.subtree_size())
            .sum::<usize>()
    }

    /// Number of leaves in this subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(|(_, child)| child.leaf_count()).sum()
        }
    }
}
