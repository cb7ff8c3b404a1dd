//! Mock rules engines shared by the integration tests.
//!
//! - `ScriptedTree`: two plies, two actions each, fixed leaf scores
//! - `Bandit`: one choice at the root, each arm ends the game
//! - `DiceRace`: roll, then move any identity's pawn; first to the goal ends it

#![allow(dead_code)]

use hidden_dice_ai::core::{IdentityId, IdentityMap, PlayerId};
use hidden_dice_ai::rules::RulesEngine;

// =============================================================================
// Hidden information shared by every mock
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hidden {
    pub identities: Vec<Option<IdentityId>>,
    pub cards: Vec<Vec<u8>>,
    pub custom_rolls: bool,
}

impl Hidden {
    /// Seat 0 knows it holds identity 0; the other seats are unknown.
    pub fn new(seats: usize) -> Self {
        let mut identities = vec![None; seats];
        identities[0] = Some(IdentityId::new(0));
        Self {
            identities,
            cards: (0..seats).map(|s| vec![s as u8; 2]).collect(),
            custom_rolls: false,
        }
    }
}

macro_rules! hidden_information {
    ($state:ty) => {
        fn player_count(&self, state: &$state) -> usize {
            state.hidden.identities.len()
        }

        fn identity_of(&self, state: &$state, player: PlayerId) -> Option<IdentityId> {
            state.hidden.identities[player.index()]
        }

        fn assign_identity(&self, state: &mut $state, player: PlayerId, identity: IdentityId) {
            state.hidden.identities[player.index()] = Some(identity);
        }

        fn tracks_cards(&self, _state: &$state) -> bool {
            true
        }

        fn clear_cards(&self, state: &mut $state, player: PlayerId) {
            state.hidden.cards[player.index()].clear();
        }

        fn set_custom_die_rolls(&self, state: &mut $state, enabled: bool) {
            state.hidden.custom_rolls = enabled;
        }
    };
}

// =============================================================================
// ScriptedTree
// =============================================================================

/// Seat 0 picks `1` or `2`, then seat 1 picks `1` or `2`.
///
/// Leaf heuristic for identity 0: (1,1)=5, (1,2)=2, (2,1)=-1, (2,2)=3.
#[derive(Clone, Debug)]
pub struct ScriptedTree;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathState {
    pub path: Vec<u8>,
    pub hidden: Hidden,
}

impl PathState {
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            hidden: Hidden::new(2),
        }
    }
}

impl RulesEngine for ScriptedTree {
    type State = PathState;
    type Action = u8;

    fn legal_actions(&self, state: &PathState) -> Vec<u8> {
        if state.path.len() >= 2 {
            Vec::new()
        } else {
            vec![1, 2]
        }
    }

    fn apply(&self, state: &PathState, action: &u8) -> PathState {
        let mut next = state.clone();
        next.path.push(*action);
        next
    }

    fn is_terminal(&self, state: &PathState) -> bool {
        state.path.len() >= 2
    }

    fn current_player(&self, state: &PathState) -> PlayerId {
        PlayerId::new((state.path.len() % 2) as u8)
    }

    fn scores(&self, state: &PathState) -> IdentityMap<i64> {
        let own = match state.path.as_slice() {
            [1, 1] => 5,
            [1, 2] => 2,
            [2, 1] => -1,
            [2, 2] => 3,
            _ => 0,
        };
        IdentityMap::from_vec(vec![own, 0])
    }

    fn is_chance_phase(&self, _state: &PathState) -> bool {
        false
    }

    fn is_unspecified_roll(&self, _action: &u8) -> bool {
        false
    }

    fn identities(&self, _state: &PathState) -> Vec<IdentityId> {
        IdentityId::all(2).collect()
    }

    hidden_information!(PathState);
}

// =============================================================================
// Bandit
// =============================================================================

/// One decision for seat 0 among `arms` actions; arm `winner` wins.
///
/// With `faulty`, the engine lists actions it then refuses to apply, which
/// trips the search's legality check.
#[derive(Clone, Debug)]
pub struct Bandit {
    pub arms: u8,
    pub winner: u8,
    pub faulty: bool,
}

impl Bandit {
    pub fn new(arms: u8, winner: u8) -> Self {
        Self {
            arms,
            winner,
            faulty: false,
        }
    }

    pub fn faulty(mut self) -> Self {
        self.faulty = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BanditState {
    pub pulled: Option<u8>,
    pub hidden: Hidden,
}

impl BanditState {
    pub fn new() -> Self {
        Self {
            pulled: None,
            hidden: Hidden::new(2),
        }
    }
}

impl RulesEngine for Bandit {
    type State = BanditState;
    type Action = u8;

    fn legal_actions(&self, state: &BanditState) -> Vec<u8> {
        if state.pulled.is_some() {
            Vec::new()
        } else {
            (0..self.arms).collect()
        }
    }

    fn is_legal(&self, state: &BanditState, action: &u8) -> bool {
        !self.faulty && self.legal_actions(state).contains(action)
    }

    fn apply(&self, state: &BanditState, action: &u8) -> BanditState {
        let mut next = state.clone();
        next.pulled = Some(*action);
        next
    }

    fn is_terminal(&self, state: &BanditState) -> bool {
        state.pulled.is_some()
    }

    fn current_player(&self, _state: &BanditState) -> PlayerId {
        PlayerId::new(0)
    }

    fn scores(&self, state: &BanditState) -> IdentityMap<i64> {
        match state.pulled {
            Some(arm) if arm == self.winner => IdentityMap::from_vec(vec![1, 0]),
            Some(_) => IdentityMap::from_vec(vec![0, 1]),
            None => IdentityMap::from_vec(vec![0, 0]),
        }
    }

    fn is_chance_phase(&self, _state: &BanditState) -> bool {
        false
    }

    fn is_unspecified_roll(&self, _action: &u8) -> bool {
        false
    }

    fn identities(&self, _state: &BanditState) -> Vec<IdentityId> {
        IdentityId::all(2).collect()
    }

    hidden_information!(BanditState);
}

// =============================================================================
// DiceRace
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RaceAction {
    /// Placeholder roll; the engine picks the outcome.
    RollAny,
    /// Concrete die outcome.
    Roll(u8),
    /// Advance an identity's pawn by the last roll.
    Advance(IdentityId),
}

/// Seats take turns: roll the die, then advance any identity's pawn.
///
/// Pawn position is the identity's score. The game ends when a pawn
/// reaches `goal`.
#[derive(Clone, Debug)]
pub struct DiceRace {
    pub identity_count: usize,
    pub goal: i64,
}

impl DiceRace {
    pub fn new(identity_count: usize, goal: i64) -> Self {
        Self { identity_count, goal }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceState {
    pub positions: Vec<i64>,
    pub to_move: u8,
    pub roll: Option<u8>,
    pub turn: u32,
    pub hidden: Hidden,
}

impl RaceState {
    pub fn new(seats: usize, identity_count: usize) -> Self {
        Self {
            positions: vec![0; identity_count],
            to_move: 0,
            roll: None,
            turn: 0,
            hidden: Hidden::new(seats),
        }
    }
}

impl RulesEngine for DiceRace {
    type State = RaceState;
    type Action = RaceAction;

    fn legal_actions(&self, state: &RaceState) -> Vec<RaceAction> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        if state.roll.is_none() {
            let mut actions = vec![RaceAction::RollAny];
            if state.hidden.custom_rolls {
                actions.extend((1..=6).map(RaceAction::Roll));
            }
            return actions;
        }
        IdentityId::all(self.identity_count)
            .map(RaceAction::Advance)
            .collect()
    }

    fn apply(&self, state: &RaceState, action: &RaceAction) -> RaceState {
        let mut next = state.clone();
        match *action {
            // Deterministic stand-in for a fair die.
            RaceAction::RollAny => next.roll = Some((state.turn % 6) as u8 + 1),
            RaceAction::Roll(face) => next.roll = Some(face),
            RaceAction::Advance(identity) => {
                next.positions[identity.index()] += i64::from(state.roll.unwrap_or(0));
                next.roll = None;
                next.turn += 1;
                next.to_move = ((state.to_move as usize + 1) % state.hidden.identities.len()) as u8;
            }
        }
        next
    }

    fn is_terminal(&self, state: &RaceState) -> bool {
        state.positions.iter().any(|p| *p >= self.goal)
    }

    fn current_player(&self, state: &RaceState) -> PlayerId {
        PlayerId::new(state.to_move)
    }

    fn scores(&self, state: &RaceState) -> IdentityMap<i64> {
        IdentityMap::from_vec(state.positions.clone())
    }

    fn is_chance_phase(&self, state: &RaceState) -> bool {
        state.roll.is_none()
    }

    fn is_unspecified_roll(&self, action: &RaceAction) -> bool {
        *action == RaceAction::RollAny
    }

    fn identities(&self, _state: &RaceState) -> Vec<IdentityId> {
        IdentityId::all(self.identity_count).collect()
    }

    hidden_information!(RaceState);
}
