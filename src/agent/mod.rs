//! Decision agents.
//!
//! An agent turns "here is the state, you are this seat, this is your time"
//! into one legal action. Agents never fail to act: any `SearchError`
//! raised during a decision is logged and replaced by a uniformly random
//! legal action.
//!
//! - `MctsAgent`: determinize, then MCTS until the budget runs out
//! - `DepthSearchAgent`: determinize, then exhaustive depth-limited minimax
//! - `RandomAgent`: uniformly random legal action, as a baseline

mod depth;
mod mcts;
mod random;

pub use depth::DepthSearchAgent;
pub use mcts::MctsAgent;
pub use random::RandomAgent;

use log::warn;

use crate::core::{Budget, PlayerId, SearchRng};
use crate::error::SearchError;
use crate::rules::RulesEngine;

/// Something that picks moves.
pub trait DecisionAgent<E: RulesEngine> {
    /// Choose an action for `player` in `state`.
    ///
    /// Returns `None` only when `state` has no legal actions. `state` is
    /// never modified; the deadline in `budget` is respected best-effort.
    fn compute_action(
        &mut self,
        engine: &E,
        state: &E::State,
        player: PlayerId,
        budget: &Budget,
    ) -> Option<E::Action>;
}

/// Resolve a search result into a legal action.
///
/// Falls back to a uniformly random element of `legal` when the search
/// failed or proposed an action the caller's state does not offer.
pub(crate) fn settle<A: Clone + PartialEq + std::fmt::Debug>(
    result: Result<A, SearchError>,
    legal: &[A],
    rng: &mut SearchRng,
) -> Option<A> {
    match result {
        Ok(action) if legal.contains(&action) => Some(action),
        Ok(action) => {
            warn!("search chose {action:?}, which is not legal here; playing a random action");
            rng.choose(legal).cloned()
        }
        Err(err) => {
            warn!("search failed: {err}; playing a random action");
            rng.choose(legal).cloned()
        }
    }
}
