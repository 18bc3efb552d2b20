//! # ABYX
//!
//! The game crate: puts the entity store, the economy and the HUD together
//! into one tick.
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  abyx_core   │   │ abyx_economy │   │   abyx_ui    │
//! │ store, tiles │──►│ strike,      │──►│ input, draw, │
//! │ approach     │   │ pickup       │   │ atlas, HUD   │
//! └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!        └──────────────────┼──────────────────┘
//!                           ▼
//!        World ─► Game::tick (9 phases) ─► FrameReport
//!                           │
//!                 events ◄──┴──► draw list ─► FrameFence ─► render thread
//! ```
//!
//! ## Modules
//!
//! - `world`: long-lived state and deterministic seeding
//! - `pipeline`: the nine tick phases
//! - `game_loop`: wall-clock timing
//! - `fence`: handoff of finished draw lists

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod camera;
pub mod error;
pub mod events;
pub mod fence;
pub mod frame;
pub mod game;
pub mod game_loop;
pub mod pipeline;
pub mod world;

pub use camera::{Camera2D, CameraView};
pub use error::{GameError, GameResult};
pub use events::{EventBus, EventReceiver, EventSender, GameEvent};
pub use fence::{frame_fence, CompletedFrame, FrameConsumer, FrameSubmitter};
pub use frame::WorldFrame;
pub use game::Game;
pub use game_loop::{FrameStats, FrameTime, GameLoop, GameLoopConfig};
pub use pipeline::{FrameReport, Phase, TickContext};
pub use world::World;
