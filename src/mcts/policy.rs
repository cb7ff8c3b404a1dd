//! MCTS tree and rollout policies.
//!
//! - UCT scoring of candidate actions at a node
//! - Maximal-set selection with uniform random tie-breaking
//! - `SimulationPolicy`: how to run rollouts (uniform random by default)
//! - Rollout outcome: did the searching identity finish on top?

use std::hash::Hash;

use smallvec::SmallVec;

use crate::core::{Budget, IdentityId, SearchRng};
use crate::error::{Result, SearchError};
use crate::rules::RulesEngine;

use super::node::NodeId;
use super::tree::MCTSTree;

/// Candidate list for tie-breaking. Branching factors are usually small.
pub type Candidates<T> = SmallVec<[T; 8]>;

// =============================================================================
// Selection
// =============================================================================

/// UCT score of taking `action` at `node_id`.
///
/// Formula: Q(s,a) + c * sqrt(ln N(s) / N(s,a)).
/// Returns infinity while the node has no children or `action` has none,
/// so every action is tried once before any is tried twice.
pub fn uct_score<S, A: Eq + Hash>(
    tree: &MCTSTree<S, A>,
    node_id: NodeId,
    action: &A,
    exploration_constant: f64,
) -> Result<f64> {
    let node = tree.get(node_id);
    let Some(child_id) = node.child(action) else {
        return Ok(f64::INFINITY);
    };

    let child = tree.get(child_id);
    if child.playouts == 0 || node.playouts == 0 {
        return Err(SearchError::ZeroPlayouts {
            parent: node.playouts,
            child: child.playouts,
        });
    }

    let q = child.wins as f64 / child.playouts as f64;
    let n_s = node.playouts as f64;
    let n_sa = child.playouts as f64;
    Ok(q + exploration_constant * (n_s.ln() / n_sa).sqrt())
}

/// Q(s,a) of an explored child: wins / playouts.
pub fn q_value<S, A: Eq + Hash>(tree: &MCTSTree<S, A>, child_id: NodeId) -> Result<f64> {
    let child = tree.get(child_id);
    child.win_rate().ok_or(SearchError::ZeroPlayouts {
        parent: child.parent.map_or(0, |p| tree.get(p).playouts),
        child: 0,
    })
}

/// Every item whose score equals the maximum score.
///
/// Runs in one pass. Returns an empty list for empty input.
pub fn maximal_by<T: Clone>(
    items: &[T],
    mut score: impl FnMut(&T) -> Result<f64>,
) -> Result<Candidates<T>> {
    let mut best = f64::NEG_INFINITY;
    let mut selected: Candidates<T> = SmallVec::new();

    for item in items {
        let value = score(item)?;
        if selected.is_empty() || value > best {
            best = value;
            selected.clear();
            selected.push(item.clone());
        } else if value == best {
            selected.push(item.clone());
        }
    }

    Ok(selected)
}

/// Pick uniformly among the maximal items.
pub fn choose_maximal<T: Clone>(
    items: &[T],
    rng: &mut SearchRng,
    score: impl FnMut(&T) -> Result<f64>,
) -> Result<Option<T>> {
    let best = maximal_by(items, score)?;
    Ok(rng.choose(&best).cloned())
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for running simulations (rollouts) from a leaf node.
pub trait SimulationPolicy<E: RulesEngine> {
    /// Play out from `state` and return the final state.
    ///
    /// Must work on its own copy; the tree's stored state is never touched.
    fn simulate(
        &self,
        engine: &E,
        state: &E::State,
        max_depth: Option<u32>,
        budget: &Budget,
        rng: &mut SearchRng,
    ) -> E::State;
}

/// Random simulation policy.
///
/// Plays uniformly random legal actions until the game ends, the depth cap
/// is reached, or the deadline passes.
#[derive(Clone, Debug, Default)]
pub struct RandomSimulation;

impl<E: RulesEngine> SimulationPolicy<E> for RandomSimulation {
    fn simulate(
        &self,
        engine: &E,
        state: &E::State,
        max_depth: Option<u32>,
        budget: &Budget,
        rng: &mut SearchRng,
    ) -> E::State {
        let mut state = state.clone();
        let mut depth = 0;

        while !engine.is_terminal(&state) && !budget.past_deadline() {
            if max_depth.is_some_and(|cap| depth >= cap) {
                break;
            }

            let actions = engine.legal_actions(&state);
            let Some(action) = rng.choose(&actions) else {
                break;
            };
            state = engine.apply(&state, action);

            depth += 1;
        }

        state
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// True if `identity` holds the highest score, ties included.
///
/// Fails if the score table has no entry for `identity`.
pub fn is_win<E: RulesEngine>(engine: &E, state: &E::State, identity: IdentityId) -> Result<bool> {
    let scores = engine.scores(state);
    let own = *scores
        .try_get(identity)
        .ok_or(SearchError::UnscoredIdentity { identity })?;
    Ok(scores.best_rival(identity).map_or(true, |rival| own >= rival))
}
