//! Engine error types.
//!
//! Errors are reserved for genuine contract violations: an unknown component
//! id or an out-of-range player index. Expected "no legal move" and "invalid
//! attempt" conditions travel as ordinary return values (empty action lists,
//! `bool` execute-success) and never as errors.

use thiserror::Error;

use super::component::ComponentId;
use super::player::PlayerId;

/// Contract violations raised by `GameState` lookups.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    /// Lookup of an id nothing was registered under. A programming error in
    /// the concrete game, not a recoverable runtime event.
    #[error("no component registered under {0}")]
    ComponentNotFound(ComponentId),

    /// An observation was requested for a player index outside the match.
    #[error("{player} out of range for a {player_count}-player match")]
    PlayerOutOfRange {
        player: PlayerId,
        player_count: usize,
    },
}

/// Fault raised by a presentation surface attached to the match loop.
///
/// The loop logs these and continues; a presentation fault never aborts a
/// match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("presentation surface fault: {0}")]
pub struct PresentationError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let err = StateError::ComponentNotFound(ComponentId::new(3));
        assert_eq!(format!("{err}"), "no component registered under component 3");

        let err = StateError::PlayerOutOfRange {
            player: PlayerId::new(4),
            player_count: 4,
        };
        assert_eq!(format!("{err}"), "player 4 out of range for a 4-player match");
    }

    #[test]
    fn test_presentation_error_display() {
        let err = PresentationError("render timed out".into());
        assert_eq!(format!("{err}"), "presentation surface fault: render timed out");
    }
}
