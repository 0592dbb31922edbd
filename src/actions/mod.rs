//! Discrete actions and the applied-action record.
//!
//! An action is an immutable value object describing one discrete change to
//! the game state. Concrete games supply their own variants as trait
//! objects; the engine stores, compares by name for diagnostics, and
//! executes them. `execute` is the whole contract: mutate the given state
//! and report success, nothing else.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::state::GameState;

/// One discrete, applicable change to a [`GameState`].
///
/// Returning `false` means a precondition was unmet (e.g. a referenced
/// component is missing) and the state was left untouched. A failed execute
/// is a silent recoverable event, never a panic: in correct operation only
/// actions previously returned by the forward model are ever applied, so the
/// failure path exists for diagnosis, not control flow.
pub trait Action: fmt::Debug + Send + Sync {
    /// Apply this action to `state`. True on success, false if preconditions
    /// were unmet (state must then be unchanged).
    fn execute(&self, state: &mut GameState) -> bool;

    /// Short display name for logs and history records.
    fn name(&self) -> &str;
}

/// Shared handle to an action, as published in the available-action list.
///
/// Cloning is cheap, which lets the loop snapshot the list for the player
/// while the state keeps its own copy.
pub type ActionBox = Arc<dyn Action>;

/// The do-nothing action.
///
/// Useful for forced passes and as a placeholder in scripted tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pass;

impl Action for Pass {
    fn execute(&self, _state: &mut GameState) -> bool {
        true
    }

    fn name(&self) -> &str {
        "pass"
    }
}

/// An applied action with metadata, kept in the state's history.
///
/// In-memory bookkeeping for diagnosis and tests; persistent replay formats
/// are out of scope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Who took the action.
    pub player: PlayerId,
    /// Action display name at the time of application.
    pub action: String,
    /// Round counter when the action resolved.
    pub round: u32,
    /// Position in the match-wide application order.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a record.
    #[must_use]
    pub fn new(player: PlayerId, action: impl Into<String>, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action: action.into(),
            round,
            sequence,
        }
    }
}
