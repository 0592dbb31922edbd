//! The forward model: a stateless rules engine over the game state.
//!
//! Concrete games implement [`ForwardModel`] to define their rules: what
//! actions are legal, how an action advances the match, and how the match
//! ends. The engine drives the model through a fixed state machine per
//! match:
//!
//! ```text
//! SETUP -> (COMPUTE_ACTIONS -> AWAIT_DECISION -> APPLY_ACTION)* -> END_GAME
//! ```
//!
//! The terminal check happens only at the top of the loop; the end state is
//! absorbing.

use tracing::warn;

use crate::actions::ActionBox;
use crate::core::{PlayerId, StateError};
use crate::state::{GameState, Observation};

/// Rules engine contract.
///
/// One "authoritative" instance advances the real match state. Additional
/// instances, one per player and each with an independently seeded
/// [`crate::core::GameRng`], exist solely so players can reason about hidden
/// information; they only ever see `&GameState` and can never mutate the
/// authoritative state.
pub trait ForwardModel: Send {
    /// One-time initialization of a fresh state before the match loop:
    /// deal, shuffle, place starting pieces. Called exactly once per match,
    /// before [`ForwardModel::register_components`].
    fn setup(&mut self, state: &mut GameState);

    /// Register every in-play component with the state's registry, each
    /// under its own stable id. Called by the `Game` constructor right after
    /// `setup`, so setup-created components register in the same pass.
    /// Re-invocation must not duplicate ids (registration overwrites by id).
    fn register_components(&self, state: &mut GameState);

    /// Enumerate the legal actions for the currently-acting player.
    ///
    /// Pure with respect to `state`. An empty list means "no decision
    /// needed": the loop will neither query the player nor call
    /// [`ForwardModel::next`] for the cycle, so a model returning empty must
    /// already have arranged progress (a phase advance, a terminal status)
    /// or the match would spin. List order matters only in that index 0 is
    /// auto-selected when exactly one action is legal.
    fn compute_available_actions(&mut self, state: &GameState) -> Vec<ActionBox>;

    /// Apply a chosen action and resolve the game rules for the turn:
    /// execute the action, advance the turn order, detect end of game.
    ///
    /// Returns the action's execute-success. A `false` is a silent
    /// recoverable failure (the state is untouched); it is never escalated,
    /// because callers only pass actions previously computed as legal.
    ///
    /// The default advances the turn order after a successful execute,
    /// which suits games whose actions carry all their own rules.
    fn next(&mut self, state: &mut GameState, action: &ActionBox) -> bool {
        if !action.execute(state) {
            warn!(action = action.name(), "action could not execute against current state");
            return false;
        }
        state.turn_order_mut().advance();
        true
    }

    /// Finalize results once the loop has observed a terminal status.
    /// Invoked exactly once per match, after the loop exits.
    fn end_game(&mut self, state: &mut GameState);

    /// Produce a player's observation.
    ///
    /// The default delegates to the state's visibility-filtered view; games
    /// with bespoke masking override this.
    fn observe(&self, state: &GameState, player: PlayerId) -> Result<Observation, StateError> {
        state.observation(player)
    }
}
