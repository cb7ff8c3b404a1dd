//! Depth search decision agent.

use log::{debug, info};

use crate::core::{Budget, PlayerId, SearchRng};
use crate::depth::{DepthSearch, DepthSearchConfig, DepthStats};
use crate::determinize::Determinizer;
use crate::error::{Result, SearchError};
use crate::rules::RulesEngine;

use super::{settle, DecisionAgent};

/// Determinized depth-limited minimax agent.
///
/// Does not poll the budget: the termination depth bounds the work.
#[derive(Clone, Debug)]
pub struct DepthSearchAgent {
    config: DepthSearchConfig,
    rng: SearchRng,
    last_stats: Option<DepthStats>,
    fallbacks: u32,
}

impl DepthSearchAgent {
    /// Create an agent. The RNG is seeded from `config.seed`.
    pub fn new(config: DepthSearchConfig) -> Self {
        let rng = SearchRng::from_seed(config.seed);
        Self {
            config,
            rng,
            last_stats: None,
            fallbacks: 0,
        }
    }

    /// Statistics of the last completed search.
    #[must_use]
    pub fn last_stats(&self) -> Option<&DepthStats> {
        self.last_stats.as_ref()
    }

    /// Decisions that ended in a random fallback.
    #[must_use]
    pub fn fallbacks(&self) -> u32 {
        self.fallbacks
    }

    fn search<E: RulesEngine>(
        &self,
        engine: &E,
        state: &E::State,
        player: PlayerId,
        rng: &mut SearchRng,
    ) -> Result<(E::Action, DepthStats)> {
        let mut determinized = state.clone();
        Determinizer.determinize(engine, &mut determinized, player, rng);

        let mut search = DepthSearch::new(engine, self.config.clone(), &determinized, player)?;
        let action = search.run(determinized)?.ok_or(SearchError::NoChildren)?;
        let stats = search.stats().clone();

        info!("generated tree with {} total nodes", stats.node_count);
        Ok((action, stats))
    }
}

impl Default for DepthSearchAgent {
    fn default() -> Self {
        Self::new(DepthSearchConfig::default())
    }
}

impl<E: RulesEngine> DecisionAgent<E> for DepthSearchAgent {
    fn compute_action(
        &mut self,
        engine: &E,
        state: &E::State,
        player: PlayerId,
        _budget: &Budget,
    ) -> Option<E::Action> {
        debug!("depth search agent: computing next action for {}", player);
        self.last_stats = None;

        let legal = engine.legal_actions(state);
        if legal.len() <= 1 {
            return legal.into_iter().next();
        }

        let mut rng = self.rng.fork();
        let result = match self.search(engine, state, player, &mut rng) {
            Ok((action, stats)) => {
                self.last_stats = Some(stats);
                Ok(action)
            }
            Err(err) => {
                self.fallbacks += 1;
                Err(err)
            }
        };
        settle(result, &legal, &mut rng)
    }
}
