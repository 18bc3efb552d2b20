//! Identifiers shared across the simulation, economy and HUD.

use serde::{Deserialize, Serialize};

/// Sprite identifier.
///
/// `Missing` is the fallback texture; every other id maps to one image file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    /// Fallback texture.
    Missing,
    /// The player character.
    Player,
    /// Tree, first variant.
    Tree0,
    /// Tree, second variant.
    Tree1,
    /// Rock.
    Rock0,
    /// Stone drop / inventory icon.
    Stone,
    /// Wood drop / inventory icon.
    Wood,
    /// Oven structure.
    Oven,
    /// Alter structure.
    Alter,
}

impl SpriteId {
    /// Number of sprite ids.
    pub const COUNT: usize = 9;

    /// Every sprite id, in atlas order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Missing,
        Self::Player,
        Self::Tree0,
        Self::Tree1,
        Self::Rock0,
        Self::Stone,
        Self::Wood,
        Self::Oven,
        Self::Alter,
    ];

    /// Atlas slot of this sprite.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Asset path relative to the resource root.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Missing => "res/sprites/missing_texture.png",
            Self::Player => "res/sprites/player.png",
            Self::Tree0 => "res/sprites/tree00.png",
            Self::Tree1 => "res/sprites/tree01.png",
            Self::Rock0 => "res/sprites/rock00.png",
            Self::Stone => "res/sprites/item_rock00.png",
            Self::Wood => "res/sprites/item_wood00.png",
            Self::Oven => "res/sprites/oven.png",
            Self::Alter => "res/sprites/alter.png",
        }
    }
}

/// Category of a collectible resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Dropped by rocks.
    Stone,
    /// Dropped by trees.
    Wood,
}

impl ResourceKind {
    /// Number of resource kinds.
    pub const COUNT: usize = 2;

    /// Every resource kind, in ledger order.
    pub const ALL: [Self; Self::COUNT] = [Self::Stone, Self::Wood];

    /// Ledger slot of this kind.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stone => "Stone",
            Self::Wood => "Wood",
        }
    }

    /// Sprite used for both the world drop and the inventory icon.
    #[must_use]
    pub const fn sprite(self) -> SpriteId {
        match self {
            Self::Stone => SpriteId::Stone,
            Self::Wood => SpriteId::Wood,
        }
    }
}

/// Placeable structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// Oven.
    Oven,
    /// Alter.
    Alter,
}

impl StructureKind {
    /// Every structure, in palette order.
    pub const ALL: [Self; 2] = [Self::Oven, Self::Alter];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Oven => "Oven",
            Self::Alter => "Alter",
        }
    }

    /// Palette and world sprite.
    #[must_use]
    pub const fn sprite(self) -> SpriteId {
        match self {
            Self::Oven => SpriteId::Oven,
            Self::Alter => SpriteId::Alter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_indices_match_order() {
        for (i, sprite) in SpriteId::ALL.iter().enumerate() {
            assert_eq!(sprite.index(), i);
        }
    }

    #[test]
    fn test_resource_sprites() {
        assert_eq!(ResourceKind::Wood.sprite(), SpriteId::Wood);
        assert_eq!(ResourceKind::Stone.name(), "Stone");
    }
}
