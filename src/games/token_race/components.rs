//! Track race components.

use crate::core::{Component, ComponentId, ComponentVisibility, PlayerId};

/// One node of the linear track. Public to all players.
#[derive(Clone, Debug)]
pub struct TrackNode {
    id: ComponentId,
    name: String,
    index: i64,
}

impl TrackNode {
    /// Node ids start at 0 and equal the track index.
    #[must_use]
    pub fn new(index: i64) -> Self {
        Self {
            id: ComponentId::new(index as u32),
            name: format!("node {index}"),
            index,
        }
    }

    /// Position of this node along the track.
    #[must_use]
    pub fn index(&self) -> i64 {
        self.index
    }

    /// The id a node at `index` registers under.
    #[must_use]
    pub fn id_at(index: i64) -> ComponentId {
        ComponentId::new(index as u32)
    }
}

impl Component for TrackNode {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn boxed_clone(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}

/// A one-shot movement boost only its owner knows about.
#[derive(Clone, Debug)]
pub struct BoostToken {
    id: ComponentId,
    name: String,
    owner: PlayerId,
}

impl BoostToken {
    /// Boost ids sit above the track node ids.
    #[must_use]
    pub fn new(owner: PlayerId, track_length: i64) -> Self {
        Self {
            id: Self::id_for(owner, track_length),
            name: format!("boost ({owner})"),
            owner,
        }
    }

    /// The id the boost of `owner` registers under.
    #[must_use]
    pub fn id_for(owner: PlayerId, track_length: i64) -> ComponentId {
        ComponentId::new(track_length as u32 + owner.0 as u32)
    }

    /// Owning player.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }
}

impl Component for BoostToken {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> ComponentVisibility {
        ComponentVisibility::OwnerOnly(self.owner)
    }

    fn boxed_clone(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}
