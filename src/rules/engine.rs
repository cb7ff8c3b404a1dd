//! Rules engine trait for game implementations.
//!
//! The search never interprets game concepts directly. Games implement
//! `RulesEngine` to define:
//! - What actions are legal, and how they produce successor states
//! - When the game is over and how identities score
//! - Who holds which secret identity and which private cards
//! - How die rolls are represented

use std::fmt::Debug;
use std::hash::Hash;

use crate::core::{IdentityId, IdentityMap, PlayerId};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply`: Must return a new state and leave the input untouched. Every
///   search node owns its own state.
/// - `legal_actions`: Empty means the state is terminal.
/// - `is_unspecified_roll`: In the chance phase the engine may offer a
///   placeholder "roll randomly" action next to the concrete outcomes.
/// - Hidden-information mutators are only called on a private copy before
///   search begins.
pub trait RulesEngine {
    /// Full game state. Clones must be independent.
    type State: Clone + Debug;

    /// A single legal move, including die-roll outcomes.
    type Action: Clone + Eq + Hash + Debug;

    // === Transitions ===

    /// Enumerate all legal actions for whoever moves in `state`.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Produce the successor state of `state` after `action`.
    fn apply(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Check if the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Seat to move in `state`.
    fn current_player(&self, state: &Self::State) -> PlayerId;

    /// Current score of every identity, including unclaimed ones.
    fn scores(&self, state: &Self::State) -> IdentityMap<i64>;

    /// Check whether `action` is legal in `state`.
    fn is_legal(&self, state: &Self::State, action: &Self::Action) -> bool {
        self.legal_actions(state).contains(action)
    }

    // === Chance ===

    /// True while the next transition is a die roll.
    fn is_chance_phase(&self, state: &Self::State) -> bool;

    /// True for the placeholder roll whose outcome the engine picks itself.
    fn is_unspecified_roll(&self, action: &Self::Action) -> bool;

    /// Toggle whether every concrete die outcome is offered as a legal action.
    fn set_custom_die_rolls(&self, state: &mut Self::State, enabled: bool);

    // === Hidden information ===

    /// Number of seats.
    fn player_count(&self, state: &Self::State) -> usize;

    /// Every identity on the board.
    fn identities(&self, state: &Self::State) -> Vec<IdentityId>;

    /// Identity held by `player`, if known in `state`.
    fn identity_of(&self, state: &Self::State, player: PlayerId) -> Option<IdentityId>;

    /// Record that `player` holds `identity`.
    fn assign_identity(&self, state: &mut Self::State, player: PlayerId, identity: IdentityId);

    /// True if this game variant deals private cards.
    fn tracks_cards(&self, state: &Self::State) -> bool;

    /// Replace `player`'s private cards with an empty hand.
    fn clear_cards(&self, state: &mut Self::State, player: PlayerId);
}
