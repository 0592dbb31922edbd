//! Immutable per-match configuration.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Immutable configuration for one game instance.
///
/// Set at construction, never mutated afterwards. Besides the player count
/// and the master seed, games stash their own scalar parameters under string
/// keys ("track_length", "starting_life", ...). Values are `i64` only;
/// encode booleans as 0/1 and enums as discriminants.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameParams {
    player_count: usize,
    seed: u64,
    values: FxHashMap<String, i64>,
}

impl GameParams {
    /// Create parameters for a `player_count`-player match.
    #[must_use]
    pub fn new(player_count: usize, seed: u64) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            seed,
            values: FxHashMap::default(),
        }
    }

    /// Add a game-specific parameter.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: i64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Number of players in the match.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Master seed the authoritative forward model derives its RNG from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read a game-specific parameter, falling back to `default`.
    #[must_use]
    pub fn value(&self, key: &str, default: i64) -> i64 {
        self.values.get(key).copied().unwrap_or(default)
    }
}
