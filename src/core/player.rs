//! Player identification and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe, zero-based player identifier. A match supports 1-255 players;
//! the `Game` builder assigns ids in construction order.
//!
//! ## PlayerMap
//!
//! Per-player data keyed by `PlayerId`, backed by a `Vec` sized to the
//! player count at construction. The length never changes for the lifetime
//! of a match, which is what keeps `player_results.len() == player_count`
//! true by construction.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Zero-based player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a player ID from a raw index.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every player ID of a `player_count`-player match.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Whether this ID is valid for a `player_count`-player match.
    #[must_use]
    pub const fn in_range(self, player_count: usize) -> bool {
        (self.0 as usize) < player_count
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// Fixed-size per-player storage with O(1) access by `PlayerId`.
///
/// ## Example
///
/// ```
/// use tabletop_engine::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<i64> = PlayerMap::with_value(3, 0);
/// scores[PlayerId::new(1)] = 7;
///
/// assert_eq!(scores[PlayerId::new(0)], 0);
/// assert_eq!(scores[PlayerId::new(1)], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    slots: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one slot per player, filled by a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            slots: (0..player_count as u8).map(|i| factory(PlayerId(i))).collect(),
        }
    }

    /// Create a map with every slot set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a map with every slot defaulted.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Number of players this map was sized for.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.slots.len()
    }

    /// Borrow a player's slot.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.slots[player.index()]
    }

    /// Mutably borrow a player's slot.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.slots[player.index()]
    }

    /// Iterate over `(PlayerId, &T)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.slots.iter().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over `(PlayerId, &mut T)` pairs in id order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
