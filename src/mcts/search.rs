//! Core MCTS search algorithm.
//!
//! Runs the four-phase loop (selection, expansion, simulation,
//! backpropagation) over a determinized state until the budget runs out,
//! then picks the root child with the best win rate.

use std::time::Instant;

use log::trace;

use crate::core::{Budget, IdentityId, PlayerId, SearchRng};
use crate::error::{Result, SearchError};
use crate::rules::RulesEngine;

use super::config::MCTSConfig;
use super::node::{MCTSNode, NodeId};
use super::policy::{choose_maximal, is_win, q_value, uct_score, RandomSimulation, SimulationPolicy};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Main MCTS search context for one decision.
///
/// Borrows the rules engine and owns the tree. The tree is discarded with
/// the search; nothing carries over to the next decision.
pub struct MCTSSearch<'e, E: RulesEngine> {
    /// The game rules engine.
    engine: &'e E,

    /// Search configuration.
    config: MCTSConfig,

    /// The identity rollouts are scored for.
    identity: IdentityId,

    /// The search tree.
    tree: MCTSTree<E::State, E::Action>,

    /// Simulation policy.
    simulation: Box<dyn SimulationPolicy<E> + 'e>,

    /// Search statistics.
    stats: SearchStats,
}

impl<'e, E: RulesEngine> MCTSSearch<'e, E> {
    /// Create a search rooted at `root_state`, playing for `player`.
    ///
    /// `root_state` must already be determinized: `player` needs a known
    /// identity.
    pub fn new(
        engine: &'e E,
        config: MCTSConfig,
        root_state: E::State,
        player: PlayerId,
    ) -> Result<Self> {
        let identity = engine
            .identity_of(&root_state, player)
            .ok_or(SearchError::UnknownIdentity { player })?;

        Ok(Self {
            engine,
            config,
            identity,
            tree: MCTSTree::new(root_state),
            simulation: Box::new(RandomSimulation),
            stats: SearchStats::default(),
        })
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<S: SimulationPolicy<E> + 'e>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Run iterations until the budget says stop, then pick the best root action.
    pub fn run(&mut self, budget: &Budget, rng: &mut SearchRng) -> Result<E::Action> {
        let start = Instant::now();

        while !budget.should_stop(self.stats.iterations) {
            self.iteration(budget, rng)?;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.best_action(rng)
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    pub fn iteration(&mut self, budget: &Budget, rng: &mut SearchRng) -> Result<()> {
        let (node, action) = self.selection(rng)?;
        let leaf = self.expansion(node, action)?;
        let won = self.simulation(leaf, budget, rng)?;
        self.backpropagation(leaf, won);
        self.stats.iterations += 1;
        Ok(())
    }

    // === SELECTION ===

    /// Descend from the root to the first unexplored (node, action) pair.
    ///
    /// Returns `(node, None)` when the descent reaches a terminal node.
    pub fn selection(&self, rng: &mut SearchRng) -> Result<(NodeId, Option<E::Action>)> {
        trace!("mcts: selection");
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);
            let actions = self.engine.legal_actions(&node.state);
            if actions.is_empty() {
                return Ok((current, None));
            }

            let selected = match self.sample_chance_outcome(&node.state, &actions, rng) {
                Some(outcome) => outcome,
                None => self.select_uct(current, &actions, rng)?,
            };

            match node.child(&selected) {
                Some(child) => current = child,
                None => return Ok((current, Some(selected))),
            }
        }
    }

    /// Uniformly sampled concrete die outcome, if this is a chance node.
    ///
    /// Chance nodes bypass UCT. Returns `None` outside the chance phase, when
    /// outcome sampling is disabled, or when only the placeholder roll exists.
    fn sample_chance_outcome(
        &self,
        state: &E::State,
        actions: &[E::Action],
        rng: &mut SearchRng,
    ) -> Option<E::Action> {
        if !self.config.simulate_all_dice_outcomes || !self.engine.is_chance_phase(state) {
            return None;
        }
        let outcomes: Vec<E::Action> = actions
            .iter()
            .filter(|a| !self.engine.is_unspecified_roll(a))
            .cloned()
            .collect();
        rng.choose(&outcomes).cloned()
    }

    fn select_uct(
        &self,
        node: NodeId,
        actions: &[E::Action],
        rng: &mut SearchRng,
    ) -> Result<E::Action> {
        let c = self.config.exploration_constant;
        choose_maximal(actions, rng, |a| uct_score(&self.tree, node, a, c))?
            .ok_or(SearchError::NoLegalActions)
    }

    // === EXPANSION ===

    /// Add the child reached by `action` under `node` and return it.
    ///
    /// With no action (terminal node) the node itself is returned. The action
    /// must be legal and not yet expanded at `node`.
    pub fn expansion(&mut self, node: NodeId, action: Option<E::Action>) -> Result<NodeId> {
        trace!("mcts: expansion");
        let Some(action) = action else {
            return Ok(node);
        };

        let parent = self.tree.get(node);
        if !self.engine.is_legal(&parent.state, &action) {
            return Err(SearchError::illegal(&action));
        }
        if parent.has_child(&action) {
            return Err(SearchError::already_expanded(&action));
        }

        let state = self.engine.apply(&parent.state, &action);
        let depth = parent.depth + 1;
        let child = self.tree.alloc(MCTSNode::new(Some(node), depth, state));
        self.tree.get_mut(node).children.insert(action, child);

        self.stats.nodes_expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        Ok(child)
    }

    // === SIMULATION ===

    /// Roll out from a scratch copy of `node`'s state.
    ///
    /// Returns true if the searching identity finishes with the top score.
    pub fn simulation(&mut self, node: NodeId, budget: &Budget, rng: &mut SearchRng) -> Result<bool> {
        trace!("mcts: simulation");
        let state = &self.tree.get(node).state;
        let end = self.simulation.simulate(
            self.engine,
            state,
            self.config.simulation_depth,
            budget,
            rng,
        );
        self.stats.simulations += 1;
        is_win(self.engine, &end, self.identity)
    }

    // === BACKPROPAGATION ===

    /// Count the rollout at `node` and every ancestor.
    pub fn backpropagation(&mut self, node: NodeId, won: bool) {
        trace!("mcts: backpropagation");
        self.tree.backpropagate(node, won);
    }

    // === DECISION ===

    /// Root action with the best Q(s,a); ties broken uniformly.
    pub fn best_action(&mut self, rng: &mut SearchRng) -> Result<E::Action> {
        let root = self.tree.root_node();
        let explored: Vec<(E::Action, NodeId)> = root
            .children
            .iter()
            .map(|(a, id)| (a.clone(), *id))
            .collect();

        let (action, child) = choose_maximal(&explored, rng, |(_, id)| q_value(&self.tree, *id))?
            .ok_or(SearchError::NoChildren)?;

        let root = self.tree.root_node();
        let chosen = self.tree.get(child);
        self.stats.root_playouts = root.playouts;
        self.stats.root_wins = root.wins;
        self.stats.chosen_wins = chosen.wins;
        self.stats.chosen_playouts = chosen.playouts;
        Ok(action)
    }

    /// `(action, wins, playouts)` for every explored root child.
    pub fn action_values(&self) -> Vec<(E::Action, u32, u32)> {
        self.tree
            .root_node()
            .children
            .iter()
            .map(|(a, id)| {
                let child = self.tree.get(*id);
                (a.clone(), child.wins, child.playouts)
            })
            .collect()
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the search tree.
    #[must_use]
    pub fn tree(&self) -> &MCTSTree<E::State, E::Action> {
        &self.tree
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}
