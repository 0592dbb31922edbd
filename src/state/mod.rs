//! Mutable game state: the single authoritative snapshot of a match.
//!
//! `GameState` owns the turn order, the component registry, the transient
//! available-action cache, the match status and per-player results, and the
//! current phase. All mutation flows through named setters; the forward
//! model is the only collaborator expected to call them, which keeps the
//! encapsulation boundary of the rules engine intact.

mod observation;

pub use observation::Observation;

use std::sync::Arc;

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

use crate::actions::{ActionBox, ActionRecord};
use crate::core::{
    Component, ComponentId, ComponentRegistry, GameParams, GamePhase, GameStatus, PlayerId,
    PlayerMap, StateError,
};
use crate::turns::TurnOrder;

/// All game data for one match in a moment in time.
#[derive(Debug)]
pub struct GameState {
    params: GameParams,
    turn_order: Box<dyn TurnOrder>,
    components: ComponentRegistry,
    /// Legal actions for the current cycle. Overwritten every turn;
    /// published to the player as an immutable snapshot.
    available_actions: Arc<[ActionBox]>,
    status: GameStatus,
    player_results: PlayerMap<GameStatus>,
    phase: GamePhase,
    global_values: FxHashMap<String, i64>,
    player_values: PlayerMap<FxHashMap<String, i64>>,
    /// Per-player value keys every opponent may observe. Keys not listed
    /// here are private to their owner when observations are built.
    public_player_keys: FxHashSet<String>,
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a fresh state from immutable parameters and a turn order.
    ///
    /// The turn order must be sized to the same player count as the
    /// parameters.
    #[must_use]
    pub fn new(params: GameParams, turn_order: Box<dyn TurnOrder>) -> Self {
        assert_eq!(
            params.player_count(),
            turn_order.player_count(),
            "turn order sized for a different player count"
        );

        let player_count = params.player_count();
        Self {
            params,
            turn_order,
            components: ComponentRegistry::new(),
            available_actions: Arc::from(Vec::new()),
            status: GameStatus::Ongoing,
            player_results: PlayerMap::with_value(player_count, GameStatus::Ongoing),
            phase: GamePhase::MAIN,
            global_values: FxHashMap::default(),
            player_values: PlayerMap::with_default(player_count),
            public_player_keys: FxHashSet::default(),
            history: Vector::new(),
        }
    }

    // === Read contract ===

    /// Immutable match parameters.
    #[must_use]
    pub fn params(&self) -> &GameParams {
        &self.params
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.params.player_count()
    }

    /// The turn order policy.
    #[must_use]
    pub fn turn_order(&self) -> &dyn TurnOrder {
        self.turn_order.as_ref()
    }

    /// Mutable access to the turn order, for the forward model.
    pub fn turn_order_mut(&mut self) -> &mut dyn TurnOrder {
        self.turn_order.as_mut()
    }

    /// Player the turn order expects to act (or react) next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn_order.current_player()
    }

    /// Current round counter.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.turn_order.round()
    }

    /// Global match status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while the match keeps running.
    #[must_use]
    pub fn is_not_terminal(&self) -> bool {
        self.status.is_ongoing()
    }

    /// Per-player outcome slots.
    #[must_use]
    pub fn player_results(&self) -> &PlayerMap<GameStatus> {
        &self.player_results
    }

    /// One player's outcome slot.
    #[must_use]
    pub fn player_result(&self, player: PlayerId) -> GameStatus {
        self.player_results[player]
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    /// The most recently published action list.
    #[must_use]
    pub fn actions(&self) -> &[ActionBox] {
        &self.available_actions
    }

    /// Immutable shared snapshot of the most recently published action list.
    #[must_use]
    pub fn actions_snapshot(&self) -> Arc<[ActionBox]> {
        Arc::clone(&self.available_actions)
    }

    /// Applied-action history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Mutation points ===

    /// Replace the turn order (rule-driven override; e.g. a skip effect).
    pub fn set_turn_order(&mut self, turn_order: Box<dyn TurnOrder>) {
        assert_eq!(
            self.player_count(),
            turn_order.player_count(),
            "turn order sized for a different player count"
        );
        self.turn_order = turn_order;
    }

    /// Set the global status.
    ///
    /// The status is monotonic: once terminal it never changes, and a later
    /// attempt to overwrite it with a different value is ignored and logged.
    pub fn set_status(&mut self, status: GameStatus) {
        if self.status.is_terminal() && status != self.status {
            warn!(current = %self.status, attempted = %status, "ignoring status overwrite after game end");
            return;
        }
        self.status = status;
    }

    /// Write one player's outcome slot.
    ///
    /// Each slot is written at most once; a second write with a different
    /// value is ignored and logged.
    pub fn set_player_result(&mut self, player: PlayerId, result: GameStatus) {
        let slot = &mut self.player_results[player];
        if slot.is_terminal() && *slot != result {
            warn!(%player, current = %slot, attempted = %result, "ignoring player result overwrite");
            return;
        }
        *slot = result;
    }

    /// Set the current phase.
    pub fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    /// Reset to the default main phase.
    pub fn set_main_phase(&mut self) {
        self.phase = GamePhase::MAIN;
    }

    /// Publish the legal action list for the current cycle.
    ///
    /// Replaces the previous list wholesale; `actions` must be derived fresh
    /// from the current state, never reused across turns.
    pub fn set_available_actions(&mut self, actions: Vec<ActionBox>) {
        self.available_actions = Arc::from(actions);
    }

    /// Append an applied action to the history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    // === Components ===

    /// Register a component under its own stable id.
    pub fn put_component(&mut self, component: Box<dyn Component>) {
        self.components.put_component(component);
    }

    /// Register a batch of components.
    pub fn put_components(&mut self, components: Vec<Box<dyn Component>>) {
        self.components.put_components(components);
    }

    /// Look up a component by id.
    pub fn component(&self, id: ComponentId) -> Result<&dyn Component, StateError> {
        self.components.get(id)
    }

    /// Look up a component mutably by id.
    pub fn component_mut(&mut self, id: ComponentId) -> Result<&mut dyn Component, StateError> {
        self.components.get_mut(id)
    }

    /// Number of registered components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// The full registry (read-only).
    #[must_use]
    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    // === Scalar values ===

    /// Read a global scalar value, falling back to `default`.
    #[must_use]
    pub fn global_value(&self, key: &str, default: i64) -> i64 {
        self.global_values.get(key).copied().unwrap_or(default)
    }

    /// Write a global scalar value.
    pub fn set_global_value(&mut self, key: impl Into<String>, value: i64) {
        self.global_values.insert(key.into(), value);
    }

    /// Read one player's scalar value, falling back to `default`.
    #[must_use]
    pub fn player_value(&self, player: PlayerId, key: &str, default: i64) -> i64 {
        self.player_values[player].get(key).copied().unwrap_or(default)
    }

    /// Write one player's scalar value.
    pub fn set_player_value(&mut self, player: PlayerId, key: impl Into<String>, value: i64) {
        self.player_values[player].insert(key.into(), value);
    }

    /// Adjust one player's scalar value by a delta.
    pub fn modify_player_value(&mut self, player: PlayerId, key: &str, delta: i64) {
        let current = self.player_value(player, key, 0);
        self.player_values[player].insert(key.to_string(), current + delta);
    }

    /// Declare a per-player value key observable by every player.
    ///
    /// Per-player values default to private: an observation carries only
    /// the observer's own map in full, plus the keys marked public here for
    /// everyone else (positions on a shared board, life totals on the
    /// table). Typically called once during `setup`.
    pub fn mark_player_value_public(&mut self, key: impl Into<String>) {
        self.public_player_keys.insert(key.into());
    }

    /// Whether a per-player value key is observable by opponents.
    #[must_use]
    pub fn is_player_value_public(&self, key: &str) -> bool {
        self.public_player_keys.contains(key)
    }

    // === Observation ===

    /// Build the default visibility-filtered observation for a player.
    ///
    /// Fails with `PlayerOutOfRange` for an invalid index rather than
    /// silently returning another player's view. Games with bespoke masking
    /// override [`crate::model::ForwardModel::observe`] instead of this.
    pub fn observation(&self, player: PlayerId) -> Result<Observation, StateError> {
        if !player.in_range(self.player_count()) {
            return Err(StateError::PlayerOutOfRange {
                player,
                player_count: self.player_count(),
            });
        }

        let components: Vec<Box<dyn Component>> = self
            .components
            .visible_to(player)
            .map(Component::boxed_clone)
            .collect();
        let hidden_components = self.components.len() - components.len();

        // The observer keeps their own values in full; everyone else's maps
        // are reduced to the keys the game declared public.
        let player_values = PlayerMap::new(self.player_count(), |other| {
            if other == player {
                self.player_values[other].clone()
            } else {
                self.player_values[other]
                    .iter()
                    .filter(|(key, _)| self.public_player_keys.contains(key.as_str()))
                    .map(|(key, value)| (key.clone(), *value))
                    .collect()
            }
        });

        Ok(Observation {
            player,
            phase: self.phase.clone(),
            status: self.status,
            player_result: self.player_results[player],
            round: self.round(),
            current_player: self.current_player(),
            global_values: self.global_values.clone(),
            player_values,
            components,
            hidden_components,
        })
    }
}
