//! Determinization of hidden information.
//!
//! Before searching, the agent fills in what it cannot see with one random
//! guess consistent with what it knows:
//!
//! - Every other seat gets a distinct identity, drawn uniformly without
//!   replacement from the identities the agent does not hold itself
//! - If the variant deals private cards, every other seat is assumed to hold
//!   none

use log::debug;

use crate::core::{PlayerId, SearchRng};
use crate::rules::RulesEngine;

/// Fills hidden information with a uniformly random consistent guess.
#[derive(Clone, Copy, Debug, Default)]
pub struct Determinizer;

impl Determinizer {
    /// Determinize `state` in place from `player`'s point of view.
    ///
    /// `player`'s own identity and cards are left unchanged. Assumes the
    /// identity pool has at least one free identity per other seat.
    pub fn determinize<E: RulesEngine>(
        &self,
        engine: &E,
        state: &mut E::State,
        player: PlayerId,
        rng: &mut SearchRng,
    ) {
        let own = engine.identity_of(state, player);
        let mut pool: Vec<_> = engine
            .identities(state)
            .into_iter()
            .filter(|id| Some(*id) != own)
            .collect();
        let with_cards = engine.tracks_cards(state);

        for other in PlayerId::all(engine.player_count(state)).filter(|p| *p != player) {
            if let Some(identity) = rng.take(&mut pool) {
                engine.assign_identity(state, other, identity);
            }
            if with_cards {
                engine.clear_cards(state, other);
            }
        }

        debug!("determinized hidden information for {}", player);
    }
}
