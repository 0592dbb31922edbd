//! Named game phases.
//!
//! Phases form an open set: the engine ships `GamePhase::MAIN` as the
//! default and concrete games add their own ("Draw", "Reaction", ...). The
//! forward model switches rule sub-logic on the current phase; the engine
//! itself only stores and compares phases.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A named phase marker.
///
/// ```
/// use tabletop_engine::core::GamePhase;
///
/// const REACTION: GamePhase = GamePhase::from_static("Reaction");
///
/// assert_eq!(GamePhase::default(), GamePhase::MAIN);
/// assert_ne!(REACTION, GamePhase::MAIN);
/// assert_eq!(REACTION.name(), "Reaction");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GamePhase(Cow<'static, str>);

impl GamePhase {
    /// The default phase every match starts in.
    pub const MAIN: GamePhase = GamePhase::from_static("Main");

    /// Create a phase from a runtime name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Create a phase from a static name, usable in `const` contexts.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The phase name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::MAIN
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
