//! Per-player filtered views of the game state.

use rustc_hash::FxHashMap;

use crate::core::{Component, GamePhase, GameStatus, PlayerId, PlayerMap};

/// A player-specific view of the match.
///
/// Produced fresh on demand and never cached across turns: the underlying
/// state is mutable, so a stale observation would misreport it. Components
/// the player may not see are omitted; only their count leaks (hand sizes
/// are public knowledge in most tabletop games).
#[derive(Clone, Debug)]
pub struct Observation {
    /// The observing player.
    pub player: PlayerId,
    /// Current phase.
    pub phase: GamePhase,
    /// Global match status.
    pub status: GameStatus,
    /// The observing player's own result slot.
    pub player_result: GameStatus,
    /// Round counter at observation time.
    pub round: u32,
    /// Player the turn order expects to act next.
    pub current_player: PlayerId,
    /// Global scalar values (all public).
    pub global_values: FxHashMap<String, i64>,
    /// Per-player scalar values. The observer's own map is complete; other
    /// players' maps carry only the keys the game marked public.
    pub player_values: PlayerMap<FxHashMap<String, i64>>,
    /// Clones of every component the player may observe.
    pub components: Vec<Box<dyn Component>>,
    /// How many registered components were withheld.
    pub hidden_components: usize,
}

impl Observation {
    /// Look up a visible component by display name.
    #[must_use]
    pub fn component_named(&self, name: &str) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// The observer's own scalar value, falling back to `default`.
    #[must_use]
    pub fn own_value(&self, key: &str, default: i64) -> i64 {
        self.player_values[self.player]
            .get(key)
            .copied()
            .unwrap_or(default)
    }
}
