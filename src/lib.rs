//! # hidden-dice-ai
//!
//! Move selection for multi-player, dice-driven board games with secret
//! identities, under a hard wall-clock deadline.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: Rules, scoring and hidden information come from a
//!    `RulesEngine` implementation. The search never interprets them.
//!
//! 2. **Determinize, Then Search**: Each decision fills in hidden identities
//!    and cards with one random consistent guess, then searches as if the
//!    game had perfect information.
//!
//! 3. **Always Act**: Search failures are typed errors. Agents log them and
//!    play a random legal action instead.
//!
//! ## Architecture
//!
//! - **MCTS**: UCT selection, one-child-per-iteration expansion, random
//!   rollouts scored as win/loss, ancestor-walking backpropagation. Die-roll
//!   nodes can sample concrete outcomes instead of running UCT.
//!
//! - **Depth Search**: Full-width expansion to a fixed ply, "own score minus
//!   best rival" heuristic, max on own turns and min on everyone else's.
//!
//! - **Single RNG per decision**: Every random choice flows through one
//!   seedable `SearchRng`, so tests are reproducible.
//!
//! ## Modules
//!
//! - `core`: Seats, identities, RNG, budgets
//! - `rules`: RulesEngine trait for game implementations
//! - `determinize`: Hidden-information completion
//! - `mcts`: Monte Carlo Tree Search
//! - `depth`: Depth-limited exhaustive minimax
//! - `agent`: Decision agents with random fallback
//! - `error`: Search error types

pub mod agent;
pub mod core;
pub mod depth;
pub mod determinize;
pub mod error;
pub mod mcts;
pub mod rules;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use crate::core::{Budget, IdentityId, IdentityMap, PlayerId, SearchRng};

pub use crate::rules::RulesEngine;

pub use crate::error::{Result, SearchError};

pub use crate::determinize::Determinizer;

pub use crate::mcts::{
    MCTSConfig, MCTSNode, MCTSSearch, MCTSTree, NodeId, RandomSimulation, SearchStats,
    SimulationPolicy,
};

pub use crate::depth::{DepthSearch, DepthSearchConfig, DepthSearchNode, DepthStats};

pub use crate::agent::{DecisionAgent, DepthSearchAgent, MctsAgent, RandomAgent};
