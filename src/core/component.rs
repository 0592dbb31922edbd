//! Components and the flat component registry.
//!
//! A component is any discrete game piece a match tracks: a card, a token, a
//! board node. The engine never interprets what a component *is* - it only
//! requires a stable id, a display name, and a visibility rule used when
//! building per-player observations.
//!
//! ## Registry contract
//!
//! The registry is a flat map from `ComponentId` to the component itself.
//! Components must be stored under their own id, never a game-specific key;
//! `get` relies on that. Re-registering an id overwrites in place, so a
//! repeated registration pass leaves the registry unchanged.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::StateError;
use super::player::PlayerId;

/// Stable identifier of a game component, unique for the lifetime of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// Create a component ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "component {}", self.0)
    }
}

/// Who may see a component when observations are built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentVisibility {
    /// Visible to every player (board nodes, shared counters).
    Public,
    /// Visible only to the owning player (a hand card, a secret objective).
    OwnerOnly(PlayerId),
    /// Visible to nobody (a face-down deck).
    Hidden,
}

impl ComponentVisibility {
    /// Whether a player with this id may observe the component.
    #[must_use]
    pub fn visible_to(self, player: PlayerId) -> bool {
        match self {
            ComponentVisibility::Public => true,
            ComponentVisibility::OwnerOnly(owner) => owner == player,
            ComponentVisibility::Hidden => false,
        }
    }
}

/// A discrete game piece tracked by the registry.
///
/// Concrete games implement this for their own piece types. The engine only
/// needs identity, a name for diagnostics, and a visibility rule.
pub trait Component: std::fmt::Debug + Send + Sync {
    /// Stable id, unique across all components of the match.
    fn id(&self) -> ComponentId;

    /// Display name for diagnostics and logs.
    fn name(&self) -> &str;

    /// Visibility rule applied when observations are built.
    fn visibility(&self) -> ComponentVisibility {
        ComponentVisibility::Public
    }

    /// Clone into a fresh box, used when copying visible components into an
    /// observation.
    fn boxed_clone(&self) -> Box<dyn Component>;
}

impl Clone for Box<dyn Component> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// Flat registry mapping component ids to in-play components.
#[derive(Clone, Debug, Default)]
pub struct ComponentRegistry {
    components: FxHashMap<ComponentId, Box<dyn Component>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Whether an id is registered.
    #[must_use]
    pub fn contains(&self, id: ComponentId) -> bool {
        self.components.contains_key(&id)
    }

    /// Register a component under its own id.
    ///
    /// Registering an id that already exists overwrites the previous entry.
    pub fn put_component(&mut self, component: Box<dyn Component>) {
        self.components.insert(component.id(), component);
    }

    /// Register a batch of components, each under its own id.
    pub fn put_components(&mut self, components: Vec<Box<dyn Component>>) {
        for component in components {
            self.put_component(component);
        }
    }

    /// Look up a component by id.
    ///
    /// An unknown id is a programming error in the concrete game, surfaced
    /// as `StateError::ComponentNotFound`.
    pub fn get(&self, id: ComponentId) -> Result<&dyn Component, StateError> {
        self.components
            .get(&id)
            .map(|c| c.as_ref())
            .ok_or(StateError::ComponentNotFound(id))
    }

    /// Look up a component mutably by id.
    pub fn get_mut(&mut self, id: ComponentId) -> Result<&mut dyn Component, StateError> {
        self.components
            .get_mut(&id)
            .map(|c| &mut **c as &mut dyn Component)
            .ok_or(StateError::ComponentNotFound(id))
    }

    /// Iterate over all registered components in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Component> {
        self.components.values().map(|c| c.as_ref())
    }

    /// Iterate over the components a given player may observe.
    pub fn visible_to(&self, player: PlayerId) -> impl Iterator<Item = &dyn Component> {
        self.iter().filter(move |c| c.visibility().visible_to(player))
    }
}
