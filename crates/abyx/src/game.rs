//! The assembled game: configuration, world, sprites and the event bus.

use abyx_shared::GameConfig;
use abyx_ui::{AssetLoader, SpriteAtlas};
use tracing::{debug, info};

use crate::error::GameResult;
use crate::events::{EventBus, EventReceiver, EventSender, GameEvent};
use crate::frame::WorldFrame;
use crate::pipeline::{FrameReport, Phase, TickContext};
use crate::world::World;

/// One running game.
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) world: World,
    pub(crate) frame: WorldFrame,
    pub(crate) atlas: SpriteAtlas,
    bus: EventBus,
    events: EventSender,
    tick_count: u64,
}

impl Game {
    /// Validates `config`, loads every sprite and seeds the starting world.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration, a missing sprite, or a pool too small
    /// for the starting world.
    pub fn new(config: GameConfig, loader: &mut dyn AssetLoader) -> GameResult<Self> {
        config.validate()?;
        let atlas = SpriteAtlas::load(loader)?;
        let world = World::seeded(&config)?;
        info!(
            pool = config.pool_capacity,
            rocks = config.rock_count,
            trees = config.tree_count,
            "game ready"
        );
        Ok(Self::with_world(config, world, atlas))
    }

    /// Wraps an already built world.
    #[must_use]
    pub fn with_world(config: GameConfig, world: World, atlas: SpriteAtlas) -> Self {
        let bus = EventBus::default();
        let events = bus.sender();
        Self {
            config,
            world,
            frame: WorldFrame::default(),
            atlas,
            bus,
            events,
            tick_count: 0,
        }
    }

    /// Runs one tick: every [`Phase`] in [`Phase::ORDER`].
    pub fn tick(&mut self, ctx: &mut TickContext<'_>) -> FrameReport {
        let mut report = FrameReport::default();
        for phase in Phase::ORDER {
            phase.run(self, ctx, &mut report);
        }
        self.tick_count += 1;
        report
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Simulation state.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable simulation state, for tools and tests.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Scratch state left by the last tick.
    #[must_use]
    pub fn frame(&self) -> &WorldFrame {
        &self.frame
    }

    /// Loaded sprites.
    #[must_use]
    pub fn atlas(&self) -> &SpriteAtlas {
        &self.atlas
    }

    /// A consumer of gameplay events.
    #[must_use]
    pub fn events(&self) -> EventReceiver {
        self.bus.receiver()
    }

    /// Ticks run so far.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub(crate) fn emit(&self, event: GameEvent) {
        if !self.events.send(event) {
            debug!(?event, "event dropped");
        }
    }
}
