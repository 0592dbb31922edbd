//! # tabletop-engine
//!
//! A turn-based tabletop game simulation engine. The engine models abstract
//! game state, a forward model (rules engine) that computes legal actions
//! and applies them, and a game loop that queries players - human or
//! automated - for decisions until a terminal condition is reached.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Core**: the engine never hardcodes rules, phases, or
//!    component types. Concrete games implement [`model::ForwardModel`] and
//!    supply their own [`actions::Action`] and [`core::Component`] types.
//!
//! 2. **One Authoritative State**: a match owns exactly one mutable
//!    [`state::GameState`]; it advances only through the authoritative
//!    forward model, one action at a time, on a single thread.
//!
//! 3. **Partial Observability**: players never see the state directly, only
//!    fresh per-player [`state::Observation`]s with hidden components
//!    withheld.
//!
//! 4. **Determinism**: all randomness flows through seeded
//!    [`core::GameRng`] handles; per-player forward-model copies carry
//!    independent streams.
//!
//! ## Modules
//!
//! - `core`: players, components, parameters, phases, status, RNG, errors
//! - `actions`: the action contract and applied-action records
//! - `state`: the authoritative game state and observations
//! - `turns`: pluggable turn-order policies (sequential, simultaneous,
//!   reactive queues)
//! - `model`: the forward-model contract
//! - `players`: the player boundary and baseline implementations
//! - `game`: match wiring and the turn loop
//! - `games`: reference game implementations

pub mod actions;
pub mod core;
pub mod game;
pub mod games;
pub mod model;
pub mod players;
pub mod state;
pub mod turns;

// Re-export the commonly used types
pub use crate::actions::{Action, ActionBox, ActionRecord, Pass};
pub use crate::core::{
    Component, ComponentId, ComponentRegistry, ComponentVisibility, GameParams, GamePhase,
    GameRng, GameStatus, PlayerId, PlayerMap, PresentationError, StateError,
};
pub use crate::game::{Game, GameBuilder, NoPresentation, PresentationHook};
pub use crate::model::ForwardModel;
pub use crate::players::{Player, RandomPlayer};
pub use crate::state::{GameState, Observation};
pub use crate::turns::{SequentialTurns, SimultaneousTurns, TurnOrder};
