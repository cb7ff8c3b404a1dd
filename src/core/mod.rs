//! Core types: seats, identities, randomness, budgets.
//!
//! These are game-agnostic; the rule engine supplies everything else.

pub mod budget;
pub mod identity;
pub mod rng;

pub use budget::Budget;
pub use identity::{IdentityId, IdentityMap, PlayerId};
pub use rng::SearchRng;
