//! Minimal rules engine for unit tests.
//!
//! Two seats, three identities. Each step the mover plays `0` or `1`:
//! `1` scores a point for identity 0, `0` scores for identity 1. With
//! chance enabled, every even step is a die roll instead.

use crate::core::{IdentityId, IdentityMap, PlayerId};
use crate::rules::RulesEngine;

/// Placeholder roll action.
pub const ROLL_ANY: u8 = 255;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepState {
    pub steps: u32,
    pub scores: Vec<i64>,
    pub identities: Vec<Option<IdentityId>>,
    pub cards: Vec<Vec<u8>>,
    pub custom_rolls: bool,
    pub rolls: Vec<u8>,
}

impl Default for StepState {
    fn default() -> Self {
        Self {
            steps: 0,
            scores: vec![0, 0, 0],
            identities: vec![Some(IdentityId::new(0)), None],
            cards: vec![vec![1, 2], vec![3]],
            custom_rolls: false,
            rolls: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StepGame {
    pub limit: u32,
    pub chance: bool,
}

impl StepGame {
    pub fn new(limit: u32) -> Self {
        Self { limit, chance: false }
    }

    pub fn with_chance(mut self) -> Self {
        self.chance = true;
        self
    }
}

impl RulesEngine for StepGame {
    type State = StepState;
    type Action = u8;

    fn legal_actions(&self, state: &StepState) -> Vec<u8> {
        if state.steps >= self.limit {
            return Vec::new();
        }
        if self.is_chance_phase(state) {
            let mut actions = vec![ROLL_ANY];
            if state.custom_rolls {
                actions.extend(1..=6);
            }
            return actions;
        }
        vec![0, 1]
    }

    fn apply(&self, state: &StepState, action: &u8) -> StepState {
        let mut next = state.clone();
        if self.is_chance_phase(state) {
            next.rolls.push(if *action == ROLL_ANY { 1 } else { *action });
        } else if *action == 1 {
            next.scores[0] += 1;
        } else {
            next.scores[1] += 1;
        }
        next.steps += 1;
        next
    }

    fn is_terminal(&self, state: &StepState) -> bool {
        state.steps >= self.limit
    }

    fn current_player(&self, state: &StepState) -> PlayerId {
        PlayerId::new((state.steps % 2) as u8)
    }

    fn scores(&self, state: &StepState) -> IdentityMap<i64> {
        IdentityMap::from_vec(state.scores.clone())
    }

    fn is_chance_phase(&self, state: &StepState) -> bool {
        self.chance && state.steps % 2 == 0
    }

    fn is_unspecified_roll(&self, action: &u8) -> bool {
        *action == ROLL_ANY
    }

    fn set_custom_die_rolls(&self, state: &mut StepState, enabled: bool) {
        state.custom_rolls = enabled;
    }

    fn player_count(&self, state: &StepState) -> usize {
        state.identities.len()
    }

    fn identities(&self, state: &StepState) -> Vec<IdentityId> {
        IdentityId::all(state.scores.len()).collect()
    }

    fn identity_of(&self, state: &StepState, player: PlayerId) -> Option<IdentityId> {
        state.identities.get(player.index()).copied().flatten()
    }

    fn assign_identity(&self, state: &mut StepState, player: PlayerId, identity: IdentityId) {
        state.identities[player.index()] = Some(identity);
    }

    fn tracks_cards(&self, _state: &StepState) -> bool {
        true
    }

    fn clear_cards(&self, state: &mut StepState, player: PlayerId) {
        state.cards[player.index()].clear();
    }
}
