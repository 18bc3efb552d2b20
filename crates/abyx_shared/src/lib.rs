//! # ABYX Shared
//!
//! Common types used by every crate in the workspace.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on a rendering backend or windowing layer.
//! If you need draw types, put them in `abyx_ui`.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod ids;
pub mod math;

pub use config::{ConfigError, GameConfig};
pub use ids::{ResourceKind, SpriteId, StructureKind};
pub use math::{Range2, Vec2};
