//! Token race: a minimal complete game on top of the engine.
//!
//! Players race a token along a linear track of board nodes. Each turn the
//! active player advances 1 to `max_step` spaces, or spends their one-shot
//! secret boost (a component only its owner can observe). First token on
//! the final node wins; everyone else loses.
//!
//! Small as it is, the game exercises every part of the engine contract:
//! component registration and lookup by stable id, owner-only visibility
//! and per-player value privacy in observations, action enumeration,
//! rule-driven turn advancement, and end-of-game detection inside `next`.

mod actions;
mod components;
mod game;

pub use actions::{Advance, UseBoost};
pub use components::{BoostToken, TrackNode};
pub use game::{TokenRace, TokenRaceBuilder};

/// Parameter key: number of track nodes.
pub const TRACK_LENGTH: &str = "track_length";
/// Parameter key: maximum spaces per advance.
pub const MAX_STEP: &str = "max_step";

/// Player value key: current track position. Marked public in setup.
pub const POSITION: &str = "position";
/// Player value key: 1 once the boost has been spent. Private to the owner.
pub const BOOST_SPENT: &str = "boost_spent";
