//! The player boundary.
//!
//! A player is a polymorphic decision-maker: human-driven, scripted, or
//! learned. The engine never inspects player internals; it calls through
//! this capability set and nothing else. Decision retrieval is a blocking
//! call from the loop's perspective - the core imposes no timeout.

mod random;

pub use random::RandomPlayer;

use crate::actions::ActionBox;
use crate::core::PlayerId;
use crate::model::ForwardModel;
use crate::state::Observation;

/// Decision-maker contract.
///
/// All hooks except [`Player::get_action`] default to no-ops so simple
/// players only implement the one method that matters.
pub trait Player: Send {
    /// Called once before the match loop starts, with the player's assigned
    /// id (stable, zero-based, equal to construction order) and their first
    /// observation.
    fn initialize(&mut self, player_id: PlayerId, observation: &Observation) {
        let _ = (player_id, observation);
    }

    /// Choose among the available actions; returns an index into `actions`.
    ///
    /// Only called with two or more actions. The engine assumes a
    /// well-behaved player and does not re-validate the index; an
    /// out-of-range return is a contract breach and panics in the loop.
    /// Implementations that wrap untrusted input should clamp or validate
    /// here, at the player boundary.
    fn get_action(&mut self, observation: &Observation, actions: &[ActionBox]) -> usize;

    /// Delivered whenever a cycle resolves without a decision (zero or one
    /// legal action), so learners and loggers still see every state.
    fn register_updated_observation(&mut self, observation: &Observation) {
        let _ = observation;
    }

    /// Called exactly once after the loop has exited, with the player's
    /// final observation.
    fn finalize(&mut self, observation: &Observation) {
        let _ = observation;
    }

    /// Receive this player's private forward-model copy.
    ///
    /// Players that simulate ahead over hidden information keep it; the
    /// default discards it. The copy never touches the authoritative state.
    fn set_forward_model(&mut self, model: Box<dyn ForwardModel>) {
        let _ = model;
    }
}
