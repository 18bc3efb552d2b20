//! Startup configuration.
//!
//! Every field defaults to the matching value in [`crate::constants`]; a TOML
//! file only needs to list what it changes.
//!
//! ```toml
//! pickup_radius = 48.0
//! world_seed = 7
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::constants;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`GameConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its allowed range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Tunables for one game session.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Tile edge length in world units.
    pub tile_size: f32,
    /// Cursor selection radius.
    pub click_radius: f32,
    /// Player pickup radius.
    pub pickup_radius: f32,
    /// Starting tree health.
    pub tree_health: i32,
    /// Starting rock health.
    pub rock_health: i32,
    /// Player speed in units per second.
    pub player_speed: f32,
    /// Logical HUD width.
    pub screen_width: f32,
    /// Logical HUD height.
    pub screen_height: f32,
    /// Window width in pixels.
    pub window_width: f32,
    /// Window height in pixels.
    pub window_height: f32,
    /// World zoom factor.
    pub zoom: f32,
    /// Camera follow rate.
    pub camera_follow_rate: f32,
    /// HUD fade rate.
    pub hud_fade_rate: f32,
    /// Largest delta fed to one tick.
    pub max_frame_delta: f32,
    /// Entity pool capacity.
    pub pool_capacity: usize,
    /// Half-extent of the startup scatter square.
    pub spawn_spread: f32,
    /// Rocks placed at startup.
    pub rock_count: usize,
    /// Trees placed at startup.
    pub tree_count: usize,
    /// Seed for startup scatter.
    pub world_seed: u64,
    /// Draw layer for world content.
    pub world_layer: i32,
    /// Draw layer for the HUD.
    pub hud_layer: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: constants::TILE_SIZE,
            click_radius: constants::CLICK_RADIUS,
            pickup_radius: constants::PICKUP_RADIUS,
            tree_health: constants::TREE_HEALTH,
            rock_health: constants::ROCK_HEALTH,
            player_speed: constants::PLAYER_SPEED,
            screen_width: constants::SCREEN_WIDTH,
            screen_height: constants::SCREEN_HEIGHT,
            window_width: constants::WINDOW_WIDTH,
            window_height: constants::WINDOW_HEIGHT,
            zoom: constants::ZOOM,
            camera_follow_rate: constants::CAMERA_FOLLOW_RATE,
            hud_fade_rate: constants::HUD_FADE_RATE,
            max_frame_delta: constants::MAX_FRAME_DELTA,
            pool_capacity: constants::MAX_ENTITY_COUNT,
            spawn_spread: constants::SPAWN_SPREAD,
            rock_count: constants::ROCK_SPAWN_COUNT,
            tree_count: constants::TREE_SPAWN_COUNT,
            world_seed: constants::WORLD_SEED,
            world_layer: constants::WORLD_SORT_LAYER,
            hud_layer: constants::HUD_SORT_LAYER,
        }
    }
}

impl GameConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`GameConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("tile_size", self.tile_size),
            ("click_radius", self.click_radius),
            ("pickup_radius", self.pickup_radius),
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("zoom", self.zoom),
            ("camera_follow_rate", self.camera_follow_rate),
            ("hud_fade_rate", self.hud_fade_rate),
            ("max_frame_delta", self.max_frame_delta),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        let non_negative = [
            ("player_speed", self.player_speed),
            ("spawn_spread", self.spawn_spread),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.tree_health <= 0 || self.rock_health <= 0 {
            return Err(ConfigError::Invalid("resource health must be positive".into()));
        }
        if self.pool_capacity == 0 || self.pool_capacity > u32::MAX as usize {
            return Err(ConfigError::Invalid(format!(
                "pool_capacity must be in 1..=u32::MAX, got {}",
                self.pool_capacity
            )));
        }
        // player + oven + scatter must fit
        let startup = 2 + self.rock_count + self.tree_count;
        if startup > self.pool_capacity {
            return Err(ConfigError::Invalid(format!(
                "startup spawns {startup} entities but pool_capacity is {}",
                self.pool_capacity
            )));
        }
        Ok(())
    }
}
