//! Error types for search.
//!
//! Every variant is an invariant violation: a defect in the search or in
//! the state it was handed. Running out of time is not an error. Decision
//! agents are the only recovery boundary.

use thiserror::Error;

use crate::core::{IdentityId, PlayerId};

/// Failure of a single decision computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    #[error("action {action} is not legal in the node's state")]
    IllegalAction { action: String },

    #[error("node was already expanded with action {action}")]
    AlreadyExpanded { action: String },

    #[error("UCT requested with zero playouts (parent {parent}, child {child})")]
    ZeroPlayouts { parent: u32, child: u32 },

    #[error("node depth {depth} exceeds termination depth {limit}")]
    DepthExceeded { depth: u32, limit: u32 },

    #[error("root has no explored children to choose from")]
    NoChildren,

    #[error("no identity is assigned to {player}")]
    UnknownIdentity { player: PlayerId },

    #[error("score table has no entry for {identity}")]
    UnscoredIdentity { identity: IdentityId },

    #[error("state has no legal actions")]
    NoLegalActions,
}

impl SearchError {
    /// Build an `IllegalAction` from any debuggable action.
    pub fn illegal(action: &impl std::fmt::Debug) -> Self {
        Self::IllegalAction {
            action: format!("{action:?}"),
        }
    }

    /// Build an `AlreadyExpanded` from any debuggable action.
    pub fn already_expanded(action: &impl std::fmt::Debug) -> Self {
        Self::AlreadyExpanded {
            action: format!("{action:?}"),
        }
    }
}

/// Result alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
