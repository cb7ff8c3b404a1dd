//! Monte Carlo Tree Search over a determinized state.
//!
//! ## Overview
//!
//! - **UCT tree policy**: Unvisited actions score infinity; ties are broken
//!   uniformly at random
//! - **Chance nodes**: With `simulate_all_dice_outcomes`, die-roll nodes
//!   sample a concrete outcome uniformly instead of running UCT
//! - **Win/loss rollouts**: Uniform random playouts, scored 1 if the
//!   searching identity ends with the top score (ties count)
//! - **Arena tree**: Nodes own their state and link to their parent by index
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hidden_dice_ai::core::{Budget, PlayerId, SearchRng};
//! use hidden_dice_ai::mcts::{MCTSConfig, MCTSSearch};
//!
//! let mut search = MCTSSearch::new(&engine, MCTSConfig::default(), determinized, PlayerId::new(0))?;
//! let action = search.run(&Budget::iterations(1000), &mut SearchRng::new(42))?;
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{MCTSNode, NodeId};
pub use policy::{RandomSimulation, SimulationPolicy};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::MCTSTree;
