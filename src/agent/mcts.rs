//! MCTS decision agent.

use log::{debug, info};

use crate::core::{Budget, PlayerId, SearchRng};
use crate::determinize::Determinizer;
use crate::error::Result;
use crate::mcts::{MCTSConfig, MCTSSearch, SearchStats};
use crate::rules::RulesEngine;

use super::{settle, DecisionAgent};

/// Determinized MCTS agent.
#[derive(Clone, Debug)]
pub struct MctsAgent {
    config: MCTSConfig,
    rng: SearchRng,
    last_stats: Option<SearchStats>,
    fallbacks: u32,
}

impl MctsAgent {
    /// Create an agent. The RNG is seeded from `config.seed`.
    pub fn new(config: MCTSConfig) -> Self {
        let rng = SearchRng::from_seed(config.seed);
        Self {
            config,
            rng,
            last_stats: None,
            fallbacks: 0,
        }
    }

    /// Statistics of the last completed search.
    ///
    /// `None` if the last decision skipped search or fell back.
    #[must_use]
    pub fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }

    /// Decisions that ended in a random fallback.
    #[must_use]
    pub fn fallbacks(&self) -> u32 {
        self.fallbacks
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    fn search<E: RulesEngine>(
        &self,
        engine: &E,
        state: &E::State,
        player: PlayerId,
        budget: &Budget,
        rng: &mut SearchRng,
    ) -> Result<(E::Action, SearchStats)> {
        let mut determinized = state.clone();
        Determinizer.determinize(engine, &mut determinized, player, rng);
        if self.config.simulate_all_dice_outcomes {
            engine.set_custom_die_rolls(&mut determinized, true);
        }

        let mut search = MCTSSearch::new(engine, self.config.clone(), determinized, player)?;
        let action = search.run(budget, rng)?;
        let stats = search.stats().clone();

        info!("playouts done from root node: {}", stats.root_playouts);
        info!(
            "wins/playouts from selected child node: {}/{}",
            stats.chosen_wins, stats.chosen_playouts
        );
        info!("Q(s,a) of chosen action: {:.4}", stats.chosen_q());
        Ok((action, stats))
    }
}

impl Default for MctsAgent {
    fn default() -> Self {
        Self::new(MCTSConfig::default())
    }
}

impl<E: RulesEngine> DecisionAgent<E> for MctsAgent {
    fn compute_action(
        &mut self,
        engine: &E,
        state: &E::State,
        player: PlayerId,
        budget: &Budget,
    ) -> Option<E::Action> {
        debug!("mcts agent: computing next action for {}", player);
        self.last_stats = None;

        let legal = engine.legal_actions(state);
        if legal.len() <= 1 {
            return legal.into_iter().next();
        }

        let mut rng = self.rng.fork();
        let result = self.search(engine, state, player, budget, &mut rng);
        let result = match result {
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
