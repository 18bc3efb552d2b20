//! # ABYX Economy
//!
//! Resource flow of the sandbox: trees and rocks are struck until they
//! drop a resource, the player walks over drops to collect them, and the
//! ledger keeps the per-kind totals.
//!
//! ## Example
//!
//! ```rust
//! use abyx_core::{Entity, EntityStore};
//! use abyx_economy::{collect_pickups, strike, ResourceLedger, StrikeOutcome};
//! use abyx_shared::{ResourceKind, Vec2};
//!
//! let mut store = EntityStore::new(16);
//! let mut ledger = ResourceLedger::new();
//! let rock = store.allocate(Entity::rock(Vec2::ZERO, 1)).unwrap();
//!
//! assert!(matches!(strike(&mut store, rock), StrikeOutcome::Depleted { .. }));
//! collect_pickups(&mut store, &mut ledger, Vec2::ZERO, 40.0);
//! assert_eq!(ledger.count(ResourceKind::Stone), 1);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod harvest;
pub mod ledger;

pub use harvest::{collect_pickups, strike, Pickup, StrikeOutcome};
pub use ledger::ResourceLedger;
