//! # Entities
//!
//! Entities are addressed by handles consisting of:
//! - An index into the slot array
//! - A generation counter for detecting reuse of that slot
//!
//! The entity record itself is a kind with payload: health only exists on
//! destructible kinds and a resource kind only on drops, so an entity can
//! never be both destructible and collectible.

use abyx_shared::{ResourceKind, SpriteId, StructureKind, Vec2};

/// Handle to an entity in an [`EntityStore`](super::EntityStore).
///
/// The ID is split into two parts:
/// - Lower 32 bits: slot index
/// - Upper 32 bits: slot generation at allocation time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EntityHandle(u64);

impl EntityHandle {
    /// Creates a handle from index and generation.
    #[inline]
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self(((generation as u64) << 32) | (index as u64))
    }

    /// Returns the slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0 as u32
    }

    /// Returns the generation.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        (self.0 >> 32) as u32
    }
}

impl std::fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}v{}", self.index(), self.generation())
    }
}

/// What an entity is, with the state only that kind carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// The player character.
    Player,
    /// Harvestable tree; drops wood.
    Tree {
        /// Remaining strikes.
        health: i32,
    },
    /// Harvestable rock; drops stone.
    Rock {
        /// Remaining strikes.
        health: i32,
    },
    /// A resource lying on the ground.
    Resource(ResourceKind),
    /// Placed oven.
    Oven,
    /// Placed alter.
    Alter,
}

impl EntityKind {
    /// Short lowercase name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Tree { .. } => "tree",
            Self::Rock { .. } => "rock",
            Self::Resource(_) => "resource",
            Self::Oven => "oven",
            Self::Alter => "alter",
        }
    }
}

/// One simulated object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entity {
    /// Kind and kind-specific state.
    pub kind: EntityKind,
    /// World position.
    pub position: Vec2,
    /// Sprite drawn for this entity.
    pub sprite: SpriteId,
}

impl Entity {
    /// The player, at the origin.
    #[must_use]
    pub const fn player() -> Self {
        Self {
            kind: EntityKind::Player,
            position: Vec2::ZERO,
            sprite: SpriteId::Player,
        }
    }

    /// A tree with `health` strikes remaining.
    #[must_use]
    pub const fn tree(position: Vec2, health: i32) -> Self {
        Self {
            kind: EntityKind::Tree { health },
            position,
            sprite: SpriteId::Tree0,
        }
    }

    /// A rock with `health` strikes remaining.
    #[must_use]
    pub const fn rock(position: Vec2, health: i32) -> Self {
        Self {
            kind: EntityKind::Rock { health },
            position,
            sprite: SpriteId::Rock0,
        }
    }

    /// A resource drop.
    #[must_use]
    pub const fn resource(kind: ResourceKind, position: Vec2) -> Self {
        Self {
            kind: EntityKind::Resource(kind),
            position,
            sprite: kind.sprite(),
        }
    }

    /// An oven.
    #[must_use]
    pub const fn oven(position: Vec2) -> Self {
        Self {
            kind: EntityKind::Oven,
            position,
            sprite: SpriteId::Oven,
        }
    }

    /// An alter.
    #[must_use]
    pub const fn alter(position: Vec2) -> Self {
        Self {
            kind: EntityKind::Alter,
            position,
            sprite: SpriteId::Alter,
        }
    }

    /// The entity a placed structure becomes.
    #[must_use]
    pub const fn structure(kind: StructureKind, position: Vec2) -> Self {
        match kind {
            StructureKind::Oven => Self::oven(position),
            StructureKind::Alter => Self::alter(position),
        }
    }

    /// Whether interaction can damage this entity.
    #[inline]
    #[must_use]
    pub const fn is_destructible(&self) -> bool {
        matches!(self.kind, EntityKind::Tree { .. } | EntityKind::Rock { .. })
    }

    /// Whether the player can pick this entity up.
    #[inline]
    #[must_use]
    pub const fn is_resource(&self) -> bool {
        matches!(self.kind, EntityKind::Resource(_))
    }

    /// Remaining health, for destructible kinds.
    #[must_use]
    pub const fn health(&self) -> Option<i32> {
        match self.kind {
            EntityKind::Tree { health } | EntityKind::Rock { health } => Some(health),
            _ => None,
        }
    }

    /// Mutable health, for destructible kinds.
    pub fn health_mut(&mut self) -> Option<&mut i32> {
        match &mut self.kind {
            EntityKind::Tree { health } | EntityKind::Rock { health } => Some(health),
            _ => None,
        }
    }

    /// Resource carried by a drop.
    #[must_use]
    pub const fn resource_kind(&self) -> Option<ResourceKind> {
        match self.kind {
            EntityKind::Resource(kind) => Some(kind),
            _ => None,
        }
    }

    /// Resource left behind when this entity is depleted.
    #[must_use]
    pub const fn yield_kind(&self) -> Option<ResourceKind> {
        match self.kind {
            EntityKind::Tree { .. } => Some(ResourceKind::Wood),
            EntityKind::Rock { .. } => Some(ResourceKind::Stone),
            _ => None,
        }
    }
}
