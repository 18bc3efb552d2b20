//! # Tile Coordinates
//!
//! Conversion between continuous world positions and integer tile indices.
//! Tile `n` is centered on world position `n * tile_size`.

use abyx_shared::Vec2;

/// Tile index containing `world_pos` (rounds half away from zero).
#[inline]
#[must_use]
pub fn world_to_tile(world_pos: f32, tile_size: f32) -> i32 {
    (world_pos / tile_size).round() as i32
}

/// World position of the center of tile `tile`.
#[inline]
#[must_use]
pub fn tile_to_world(tile: i32, tile_size: f32) -> f32 {
    tile as f32 * tile_size
}

/// Snaps a position to the center of its tile. Idempotent.
#[must_use]
pub fn snap_to_tile_grid(pos: Vec2, tile_size: f32) -> Vec2 {
    Vec2::new(
        tile_to_world(world_to_tile(pos.x, tile_size), tile_size),
        tile_to_world(world_to_tile(pos.y, tile_size), tile_size),
    )
}

/// Integer tile coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl TileCoord {
    /// Creates a tile coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Tile containing a world position.
    #[must_use]
    pub fn from_world(pos: Vec2, tile_size: f32) -> Self {
        Self::new(world_to_tile(pos.x, tile_size), world_to_tile(pos.y, tile_size))
    }

    /// World position of this tile's center.
    #[must_use]
    pub fn to_world(self, tile_size: f32) -> Vec2 {
        Vec2::new(tile_to_world(self.x, tile_size), tile_to_world(self.y, tile_size))
    }

    /// Whether this tile is a lit cell of the background checkerboard.
    #[must_use]
    pub fn is_checker(self) -> bool {
        let row_shift = i32::from(self.y.rem_euclid(2) == 0);
        (self.x + row_shift).rem_euclid(2) == 0
    }
}

/// Lit checkerboard tiles in `[center - radius, center + radius)` on each axis.
pub fn checkerboard(
    center: TileCoord,
    radius_x: i32,
    radius_y: i32,
) -> impl Iterator<Item = TileCoord> {
    (center.x - radius_x..center.x + radius_x)
        .flat_map(move |x| {
            (center.y - radius_y..center.y + radius_y).map(move |y| TileCoord::new(x, y))
        })
        .filter(|tile| tile.is_checker())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: f32 = 16.0;

    #[test]
    fn test_world_to_tile_rounding() {
        assert_eq!(world_to_tile(0.0, TILE), 0);
        assert_eq!(world_to_tile(7.9, TILE), 0);
        assert_eq!(world_to_tile(8.0, TILE), 1);
        assert_eq!(world_to_tile(-8.0, TILE), -1);
        assert_eq!(world_to_tile(-7.9, TILE), 0);
        assert_eq!(world_to_tile(100.0, TILE), 6);
    }

    #[test]
    fn test_tile_to_world() {
        assert_eq!(tile_to_world(3, TILE), 48.0);
        assert_eq!(tile_to_world(-2, TILE), -32.0);
    }

    #[test]
    fn test_snap_is_idempotent() {
        let samples = [
            Vec2::new(0.0, 0.0),
            Vec2::new(7.99, -8.0),
            Vec2::new(123.4, -56.7),
            Vec2::new(-149.9, 149.9),
            Vec2::new(8.0, 24.0),
            Vec2::new(-0.4, 1e4),
        ];
        for pos in samples {
            let once = snap_to_tile_grid(pos, TILE);
            assert_eq!(snap_to_tile_grid(once, TILE), once, "{pos:?}");
        }
    }

    #[test]
    fn test_tile_coord_roundtrip() {
        let tile = TileCoord::from_world(Vec2::new(33.0, -17.0), TILE);
        assert_eq!(tile, TileCoord::new(2, -1));
        assert_eq!(tile.to_world(TILE), Vec2::new(32.0, -16.0));
    }

    #[test]
    fn test_checkerboard_alternates() {
        assert!(TileCoord::new(1, 0).is_checker());
        assert!(!TileCoord::new(0, 0).is_checker());
        assert!(TileCoord::new(0, 1).is_checker());
        assert!(TileCoord::new(-1, -2).is_checker());

        let lit: Vec<_> = checkerboard(TileCoord::new(0, 0), 2, 2).collect();
        assert_eq!(lit.len(), 8);
        assert!(lit.iter().all(|t| t.is_checker()));
    }
}
