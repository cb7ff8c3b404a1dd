//! Seats, secret identities, and per-identity data storage.
//!
//! ## PlayerId
//!
//! A seat at the table. The searching agent is always one seat.
//!
//! ## IdentityId
//!
//! A secret role on the board. Each seat controls one identity, but which
//! one is hidden from the other seats. There may be more identities than
//! seats; unclaimed identities still score.
//!
//! ## IdentityMap
//!
//! Dense per-identity storage backed by `Vec` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. Seat indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use hidden_dice_ai::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Secret identity identifier. Identity indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IdentityId(pub u8);

impl IdentityId {
    /// Create a new identity ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw identity index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all identities for a board with `identity_count` identities.
    pub fn all(identity_count: usize) -> impl Iterator<Item = IdentityId> {
        (0..identity_count as u8).map(IdentityId)
    }
}

impl std::fmt::Display for IdentityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Identity {}", self.0)
    }
}

/// Per-identity data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use hidden_dice_ai::core::{IdentityId, IdentityMap};
///
/// let mut scores: IdentityMap<i64> = IdentityMap::with_value(5, 0);
/// scores[IdentityId::new(2)] = 7;
///
/// assert_eq!(scores[IdentityId::new(2)], 7);
/// assert_eq!(scores.best_rival(IdentityId::new(2)), Some(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityMap<T> {
    data: Vec<T>,
}

impl<T> IdentityMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(identity_count: usize, factory: impl Fn(IdentityId) -> T) -> Self {
        assert!(identity_count > 0, "Must have at least 1 identity");
        assert!(identity_count <= 255, "At most 255 identities supported");

        let data = (0..identity_count as u8)
            .map(|i| factory(IdentityId(i)))
            .collect();

        Self { data }
    }

    /// Create a new map with all entries set to the same value.
    pub fn with_value(identity_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(identity_count, |_| value.clone())
    }

    /// Build a map from values already in identity order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 identity");
        assert!(data.len() <= 255, "At most 255 identities supported");
        Self { data }
    }

    /// Get the number of identities.
    #[must_use]
    pub fn identity_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to an identity's data.
    #[must_use]
    pub fn get(&self, identity: IdentityId) -> &T {
        &self.data[identity.index()]
    }

    /// Get an identity's data, or `None` if the map has no such identity.
    #[must_use]
    pub fn try_get(&self, identity: IdentityId) -> Option<&T> {
        self.data.get(identity.index())
    }

    /// Get a mutable reference to an identity's data.
    pub fn get_mut(&mut self, identity: IdentityId) -> &mut T {
        &mut self.data[identity.index()]
    }

    /// Iterate over (IdentityId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (IdentityId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (IdentityId(i as u8), v))
    }
}

impl<T: Ord + Copy> IdentityMap<T> {
    /// Highest value held by any identity other than `own`.
    ///
    /// Returns `None` when `own` is the only identity.
    #[must_use]
    pub fn best_rival(&self, own: IdentityId) -> Option<T> {
        self.iter()
            .filter(|(id, _)| *id != own)
            .map(|(_, v)| *v)
            .max()
    }
}

impl<T> Index<IdentityId> for IdentityMap<T> {
    type Output = T;

    fn index(&self, identity: IdentityId) -> &Self::Output {
        self.get(identity)
    }
}

impl<T> IndexMut<IdentityId> for IdentityMap<T> {
    fn index_mut(&mut self, identity: IdentityId) -> &mut Self::Output {
        self.get_mut(identity)
    }
}
