//! # World
//!
//! Long-lived simulation state: the entity pool, the resource ledger, the
//! camera and the HUD. The starting layout is scattered from a seeded
//! ChaCha stream so every run with the same seed is identical.

use abyx_core::{snap_to_tile_grid, Entity, EntityHandle, EntityStore};
use abyx_economy::ResourceLedger;
use abyx_shared::{GameConfig, Vec2};
use abyx_ui::Hud;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::camera::Camera2D;
use crate::error::GameResult;

/// Everything that persists between ticks.
pub struct World {
    /// Entity pool.
    pub store: EntityStore,
    /// Collected resources.
    pub ledger: ResourceLedger,
    /// The player entity. Never destroyed.
    pub player: EntityHandle,
    /// World camera.
    pub camera: Camera2D,
    /// HUD state.
    pub hud: Hud,
}

impl World {
    /// A world holding only the player, at the origin.
    ///
    /// # Errors
    ///
    /// Fails if the pool cannot hold a single entity.
    pub fn empty(config: &GameConfig) -> GameResult<Self> {
        let mut store = EntityStore::new(config.pool_capacity);
        let player = store.allocate(Entity::player())?;
        Ok(Self {
            store,
            ledger: ResourceLedger::new(),
            player,
            camera: Camera2D::new(config.zoom, config.camera_follow_rate),
            hud: Hud::new(config.hud_fade_rate),
        })
    }

    /// The starting world: one oven at the origin, the player, then
    /// `rock_count` rocks and `tree_count` trees scattered within
    /// `±spawn_spread` and snapped to the tile grid.
    ///
    /// # Errors
    ///
    /// Fails if the pool is too small for the layout.
    pub fn seeded(config: &GameConfig) -> GameResult<Self> {
        let mut store = EntityStore::new(config.pool_capacity);
        let mut rng = ChaCha8Rng::seed_from_u64(config.world_seed);

        store.allocate(Entity::oven(Vec2::ZERO))?;
        let player = store.allocate(Entity::player())?;

        for _ in 0..config.rock_count {
            let position = scatter(&mut rng, config);
            store.allocate(Entity::rock(position, config.rock_health))?;
        }
        for _ in 0..config.tree_count {
            let position = scatter(&mut rng, config);
            store.allocate(Entity::tree(position, config.tree_health))?;
        }

        info!(
            seed = config.world_seed,
            entities = store.alive_count(),
            capacity = store.capacity(),
            "world seeded"
        );

        Ok(Self {
            store,
            ledger: ResourceLedger::new(),
            player,
            camera: Camera2D::new(config.zoom, config.camera_follow_rate),
            hud: Hud::new(config.hud_fade_rate),
        })
    }

    /// Where the player stands.
    #[must_use]
    pub fn player_position(&self) -> Vec2 {
        self.store
            .get(self.player)
            .map_or(Vec2::ZERO, |player| player.position)
    }
}

fn scatter(rng: &mut ChaCha8Rng, config: &GameConfig) -> Vec2 {
    let spread = config.spawn_spread;
    let raw = Vec2::new(rng.gen_range(-spread..=spread), rng.gen_range(-spread..=spread));
    snap_to_tile_grid(raw, config.tile_size)
}
