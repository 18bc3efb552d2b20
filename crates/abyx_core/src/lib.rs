//! # ABYX Core Engine
//!
//! The simulation core of a small top-down sandbox:
//! - A fixed-capacity entity store with generation-checked handles
//! - Tile coordinate mapping
//! - Frame-rate independent approach animation
//! - Cursor picking and pickup-radius queries
//!
//! ## Architecture Rules
//!
//! 1. **Fixed capacity** - the entity pool is sized once at startup
//! 2. **Handles, not references** - entities are only reachable through handles
//! 3. **Single-threaded ticks** - every mutation is visible to the next step
//!
//! ## Example
//!
//! ```rust
//! use abyx_core::{select_nearest, Entity, EntityStore};
//! use abyx_shared::Vec2;
//!
//! let mut store = EntityStore::new(1024);
//! let tree = store.allocate(Entity::tree(Vec2::ZERO, 3)).unwrap();
//! let picked = select_nearest(&store, Vec2::new(2.0, 2.0), 32.0, Entity::is_destructible);
//! assert_eq!(picked, Some(tree));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod animation;
pub mod ecs;
pub mod error;
pub mod tile;

pub use animation::{approach_scalar, approach_vector, sin_bob, Approach};
pub use ecs::{pickup_candidates, select_nearest, Entity, EntityHandle, EntityKind, EntityStore};
pub use error::{CoreError, CoreResult};
pub use tile::{checkerboard, snap_to_tile_grid, tile_to_world, world_to_tile, TileCoord};
