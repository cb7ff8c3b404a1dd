//! Uniformly random baseline agent.

use log::debug;

use crate::core::{Budget, PlayerId, SearchRng};
use crate::rules::RulesEngine;

use super::DecisionAgent;

/// Plays a uniformly random legal action.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: SearchRng,
}

impl RandomAgent {
    /// Create an agent. `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: SearchRng::from_seed(seed),
        }
    }
}

impl<E: RulesEngine> DecisionAgent<E> for RandomAgent {
    fn compute_action(
        &mut self,
        engine: &E,
        state: &E::State,
        player: PlayerId,
        _budget: &Budget,
    ) -> Option<E::Action> {
        debug!("random agent: selecting random action for {}", player);
        let legal = engine.legal_actions(state);
        self.rng.choose(&legal).cloned()
    }
}
