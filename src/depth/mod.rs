//! Depth-limited exhaustive search.
//!
//! Builds the complete game tree to `termination_depth` plies, scores the
//! leaves with "own score minus best rival score", and backs scores up with
//! max on the searching player's turns and min on every other turn.

pub mod config;
pub mod node;
pub mod search;
pub mod stats;

pub use config::DepthSearchConfig;
pub use node::DepthSearchNode;
pub use search::DepthSearch;
pub use stats::DepthStats;
