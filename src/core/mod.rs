//! Core engine types: players, components, parameters, phases, status, RNG.
//!
//! Everything here is game-agnostic. Concrete games pick their own phases,
//! component types, and parameter keys rather than modifying the core.

pub mod component;
pub mod error;
pub mod params;
pub mod phase;
pub mod player;
pub mod rng;
pub mod status;

pub use component::{Component, ComponentId, ComponentRegistry, ComponentVisibility};
pub use error::{PresentationError, StateError};
pub use params::GameParams;
pub use phase::GamePhase;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use status::GameStatus;
