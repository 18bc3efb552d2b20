//! # Entity Management
//!
//! A fixed-capacity entity pool.
//!
//! ## Design Philosophy
//!
//! - All slots are pre-allocated when the store is created
//! - Handles are slot indices with generation counters
//! - Entity kinds carry their own state; there are no unused fields per kind
//! - Queries are linear scans in slot order

mod entity;
mod spatial;
mod store;

pub use entity::{Entity, EntityHandle, EntityKind};
pub use spatial::{pickup_candidates, select_nearest};
pub use store::EntityStore;
