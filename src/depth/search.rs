//! Exhaustive depth-limited minimax.
//!
//! Expands the whole game tree to a fixed ply, scores leaves with a
//! heuristic, then backs scores up: maximize on the searching player's
//! turns, minimize on everyone else's (paranoid multi-player minimax).

use std::time::Instant;

use log::trace;

use crate::core::{IdentityId, PlayerId};
use crate::error::{Result, SearchError};
use crate::rules::RulesEngine;

use super::config::DepthSearchConfig;
use super::node::DepthSearchNode;
use super::stats::DepthStats;

/// Depth search context for one decision.
pub struct DepthSearch<'e, E: RulesEngine> {
    engine: &'e E,
    config: DepthSearchConfig,
    player: PlayerId,
    identity: IdentityId,
    stats: DepthStats,
}

impl<'e, E: RulesEngine> DepthSearch<'e, E> {
    /// Create a depth search playing for `player`.
    ///
    /// `state` must already be determinized: `player` needs a known identity.
    pub fn new(
        engine: &'e E,
        config: DepthSearchConfig,
        state: &E::State,
        player: PlayerId,
    ) -> Result<Self> {
        let identity = engine
            .identity_of(state, player)
            .ok_or(SearchError::UnknownIdentity { player })?;

        Ok(Self {
            engine,
            config,
            player,
            identity,
            stats: DepthStats::default(),
        })
    }

    /// Build, expand and evaluate a tree from `root_state`; return the best action.
    ///
    /// Returns `None` if the root has no legal actions.
    pub fn run(&mut self, root_state: E::State) -> Result<Option<E::Action>> {
        let start = Instant::now();

        let mut root = self.new_node(root_state, 0);
        self.expand(&mut root)?;
        let score = self.evaluate(&mut root)?;

        self.stats.root_score = Some(score);
        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(Self::max_action(&root))
    }

    fn new_node(&mut self, state: E::State, depth: u32) -> DepthSearchNode<E::State, E::Action> {
        self.stats.node_count += 1;
        DepthSearchNode::new(state, depth)
    }

    /// Recursively add one child per legal action down to the termination depth.
    pub fn expand(&mut self, node: &mut DepthSearchNode<E::State, E::Action>) -> Result<()> {
        let limit = self.config.termination_depth;
        if node.depth == limit {
            return Ok(());
        }
        if node.depth > limit {
            return Err(SearchError::DepthExceeded {
                depth: node.depth,
                limit,
            });
        }

        for action in self.engine.legal_actions(&node.state) {
            let state = self.engine.apply(&node.state, &action);
            let mut child = self.new_node(state, node.depth + 1);
            self.expand(&mut child)?;
            node.children.push((action, child));
        }
        Ok(())
    }

    /// Score every node bottom-up and return this node's score.
    ///
    /// Ties keep the first child in action order.
    pub fn evaluate(&mut self, node: &mut DepthSearchNode<E::State, E::Action>) -> Result<i64> {
        if node.is_leaf() {
            self.stats.leaf_count += 1;
            let score = self.heuristic(&node.state)?;
            node.score = Some(score);
            return Ok(score);
        }

        let maximizing = self.engine.current_player(&node.state) == self.player;
        let mut best: Option<i64> = None;
        for (_, child) in node.children.iter_mut() {
            let score = self.evaluate(child)?;
            best = Some(match best {
                None => score,
                Some(b) if maximizing => b.max(score),
                Some(b) => b.min(score),
            });
        }

        let score = match best {
            Some(score) => score,
            None => self.heuristic(&node.state)?,
        };
        trace!("depth: node at ply {} scored {}", node.depth, score);
        node.score = Some(score);
        Ok(score)
    }

    /// Own score minus the best rival identity's score.
    pub fn heuristic(&self, state: &E::State) -> Result<i64> {
        let scores = self.engine.scores(state);
        let own = *scores
            .try_get(self.identity)
            .ok_or(SearchError::UnscoredIdentity { identity: self.identity })?;
        Ok(scores.best_rival(self.identity).map_or(own, |rival| own - rival))
    }

    /// Root action leading to the highest-scored child, first found on ties.
    pub fn max_action(root: &DepthSearchNode<E::State, E::Action>) -> Option<E::Action> {
        let mut best: Option<(&E::Action, i64)> = None;
        for (action, child) in &root.children {
            let score = child.score.unwrap_or(i64::MIN);
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((action, score));
            }
        }
        best.map(|(action, _)| action.clone())
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &DepthStats {
        &self.stats
    }
}
