//! # Gameplay Constants
//!
//! Compile-time defaults. `GameConfig` starts from these and a TOML file
//! may override them at startup.

// =============================================================================
// WORLD GRID
// =============================================================================

/// Width and height of one tile in world units.
pub const TILE_SIZE: f32 = 16.0;

/// Tiles drawn left/right of the player by the background grid.
pub const BACKGROUND_TILE_RADIUS_X: i32 = 40;

/// Tiles drawn above/below the player by the background grid.
pub const BACKGROUND_TILE_RADIUS_Y: i32 = 30;

// =============================================================================
// INTERACTION
// =============================================================================

/// Maximum cursor distance for selecting a destructible entity.
pub const CLICK_RADIUS: f32 = 32.0;

/// Player distance under which a resource drop is collected.
pub const PICKUP_RADIUS: f32 = 40.0;

/// Starting health of a rock.
pub const ROCK_HEALTH: i32 = 3;

/// Starting health of a tree.
pub const TREE_HEALTH: i32 = 3;

/// Player walk speed in world units per second.
pub const PLAYER_SPEED: f32 = 100.0;

// =============================================================================
// CAMERA & SCREEN
// =============================================================================

/// Logical HUD resolution, width.
pub const SCREEN_WIDTH: f32 = 240.0;

/// Logical HUD resolution, height.
pub const SCREEN_HEIGHT: f32 = 135.0;

/// Default window width in pixels.
pub const WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels.
pub const WINDOW_HEIGHT: f32 = 720.0;

/// World zoom factor.
pub const ZOOM: f32 = 5.3;

/// Exponential rate of the camera following the player.
pub const CAMERA_FOLLOW_RATE: f32 = 15.0;

/// Exponential rate of HUD panel fades.
pub const HUD_FADE_RATE: f32 = 15.0;

/// Largest frame delta fed to the simulation (seconds).
pub const MAX_FRAME_DELTA: f32 = 0.1;

// =============================================================================
// DRAW LAYERS
// =============================================================================

/// Sort layer for world entities and the tile grid.
pub const WORLD_SORT_LAYER: i32 = 10;

/// Sort layer for the HUD.
pub const HUD_SORT_LAYER: i32 = 50;

// =============================================================================
// CAPACITY & SEEDING
// =============================================================================

/// Entity pool capacity.
pub const MAX_ENTITY_COUNT: usize = 1024;

/// Half-extent of the square trees and rocks are scattered over.
pub const SPAWN_SPREAD: f32 = 150.0;

/// Rocks placed at startup.
pub const ROCK_SPAWN_COUNT: usize = 10;

/// Trees placed at startup.
pub const TREE_SPAWN_COUNT: usize = 10;

/// Default world seed.
pub const WORLD_SEED: u64 = 0x0A8F_u64;
