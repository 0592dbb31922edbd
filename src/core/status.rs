//! Match and per-player result status.

use serde::{Deserialize, Serialize};

/// Outcome status of a match, or of a single player within it.
///
/// The global status is monotonic: a match starts `Ongoing` and moves to
/// exactly one terminal value, after which it never changes. In cooperative
/// games the global status doubles as each player's result; competitive
/// games assign per-player results individually.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The match is still running.
    #[default]
    Ongoing,
    /// Won (the match has a winner / the player won).
    Win,
    /// Lost.
    Lose,
    /// Ended with no winner.
    Draw,
    /// Removed for breaking the rules.
    Disqualified,
    /// Aborted without a natural conclusion (e.g. the tick guard fired).
    Abandoned,
}

impl GameStatus {
    /// Whether this status ends the match.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Whether the match is still running.
    #[must_use]
    pub const fn is_ongoing(self) -> bool {
        matches!(self, GameStatus::Ongoing)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Win => "win",
            GameStatus::Lose => "lose",
            GameStatus::Draw => "draw",
            GameStatus::Disqualified => "disqualified",
            GameStatus::Abandoned => "abandoned",
        };
        f.write_str(label)
    }
}
