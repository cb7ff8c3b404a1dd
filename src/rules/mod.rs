//! Rules engine trait for game implementations.
//!
//! Agents call into `RulesEngine` but never interpret game-specific
//! concepts directly.

pub mod engine;

pub use engine::RulesEngine;
