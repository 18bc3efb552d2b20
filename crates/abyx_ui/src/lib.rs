//! # ABYX UI
//!
//! The edges of the simulation:
//! - [`InputSource`] and the feedable [`InputState`]
//! - [`Renderer`] and the recording [`DrawList`]
//! - [`AssetLoader`] and the startup-loaded [`SpriteAtlas`]
//! - The [`Hud`]: inventory bar, structure palette, placement mode
//!
//! ## Pipeline
//!
//! ```text
//! InputState ──► Hud / world phases ──► DrawList ──► backend
//!                    │
//!                    └─ hover claim + placed structures
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assets;
pub mod error;
pub mod hud;
pub mod input;
pub mod render;

pub use assets::{AssetLoader, AssetManifest, ImageInfo, Sprite, SpriteAtlas};
pub use error::{UiError, UiResult};
pub use hud::{GameMode, Hud, HudFrame, HudOutput};
pub use input::{InputSource, InputState, Key};
pub use render::{Color, DrawCommand, DrawList, ImageHandle, Renderer, Space, Transform2D};
