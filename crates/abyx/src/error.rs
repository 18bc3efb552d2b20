//! Top-level error type.

use abyx_core::CoreError;
use abyx_shared::ConfigError;
use abyx_ui::UiError;
use thiserror::Error;

/// Anything that stops the game from starting or running.
#[derive(Debug, Error)]
pub enum GameError {
    /// Bad or unreadable configuration.
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    /// A required asset is missing.
    #[error("assets: {0}")]
    Ui(#[from] UiError),

    /// The entity pool could not hold the starting world.
    #[error("world: {0}")]
    Core(#[from] CoreError),

    /// The render thread panicked.
    #[error("render thread panicked")]
    RenderThread,
}

/// Result type for game setup and the binary.
pub type GameResult<T> = Result<T, GameError>;
