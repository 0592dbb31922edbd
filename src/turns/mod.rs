//! Turn-order policies.
//!
//! A turn order decides whose turn (or reaction) is next and tracks round
//! progression. Policies are trait objects owned by the game state and
//! advanced by the forward model after each resolved action - the loop never
//! advances them itself.
//!
//! Two policies ship with the engine:
//! - [`SequentialTurns`]: round-robin, one acting player at a time.
//! - [`SimultaneousTurns`]: every player decides once per round before the
//!   round advances.
//!
//! Both honour a reaction queue: players queued to react pre-empt the base
//! order until the queue drains.

mod sequential;
mod simultaneous;

pub use sequential::SequentialTurns;
pub use simultaneous::SimultaneousTurns;

use crate::core::PlayerId;

/// Policy deciding which player acts or reacts next.
///
/// Created once per match. The round counter is monotonically non-decreasing
/// for the whole match; when it increments is policy-specific (typically
/// once per full player rotation).
pub trait TurnOrder: std::fmt::Debug + Send {
    /// The player who must act next. If reactions are pending, the head of
    /// the reaction queue takes priority over the base order.
    fn current_player(&self) -> PlayerId;

    /// Number of players, fixed at construction.
    fn player_count(&self) -> usize;

    /// Current round counter.
    fn round(&self) -> u32;

    /// Advance past the current actor: pop a pending reaction if one exists,
    /// otherwise move the base order forward.
    fn advance(&mut self);

    /// Queue a player to react before the normal order continues.
    fn queue_reaction(&mut self, player: PlayerId);

    /// Whether any reactions are pending.
    fn has_reactions(&self) -> bool;
}
