//! # Harvesting
//!
//! Two one-way state machines, driven by the frame pipeline:
//!
//! ```text
//! tree / rock:   Intact --strike--> ... --strike--> Depleted (slot destroyed,
//!                                                   one drop spawned in place)
//! resource drop: Lying --player within pickup radius--> Collected (ledger +1,
//!                                                       slot destroyed)
//! ```

use abyx_core::{pickup_candidates, Entity, EntityHandle, EntityStore};
use abyx_shared::{ResourceKind, Vec2};
use tracing::{debug, warn};

use crate::ledger::ResourceLedger;

/// Result of one interaction with an entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrikeOutcome {
    /// Health went down but is still positive.
    Damaged {
        /// Health after the strike.
        remaining: i32,
    },
    /// Health reached zero; the entity is gone.
    Depleted {
        /// Resource the entity yields.
        kind: ResourceKind,
        /// Where the entity stood.
        position: Vec2,
        /// The spawned drop, or `None` if the pool was full.
        drop: Option<EntityHandle>,
    },
    /// The entity cannot be damaged.
    Indestructible,
    /// The handle no longer refers to a live entity.
    Stale,
}

/// Applies one strike to `target`: health goes down by exactly one.
///
/// When health reaches zero, one drop of the entity's yield is spawned at its
/// position and then the entity itself is destroyed. If the pool is full the
/// drop is skipped with a warning; the entity is still destroyed.
pub fn strike(store: &mut EntityStore, target: EntityHandle) -> StrikeOutcome {
    let Some(entity) = store.get_mut(target) else {
        return StrikeOutcome::Stale;
    };
    let Some(health) = entity.health_mut() else {
        return StrikeOutcome::Indestructible;
    };

    *health -= 1;
    let remaining = *health;
    if remaining > 0 {
        debug!(%target, remaining, "entity damaged");
        return StrikeOutcome::Damaged { remaining };
    }

    let position = entity.position;
    let Some(kind) = entity.yield_kind() else {
        return StrikeOutcome::Indestructible;
    };

    // Order is fixed: spawn, then destroy. An exactly full pool skips the drop
    // even though `target`'s slot frees up right after.
    let drop = match store.allocate(Entity::resource(kind, position)) {
        Ok(handle) => Some(handle),
        Err(err) => {
            warn!(%target, resource = kind.name(), %err, "drop skipped");
            None
        }
    };
    store.destroy(target);

    debug!(%target, resource = kind.name(), "entity depleted");
    StrikeOutcome::Depleted {
        kind,
        position,
        drop,
    }
}

/// A drop the player just collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pickup {
    /// Handle of the destroyed drop.
    pub handle: EntityHandle,
    /// What was collected.
    pub kind: ResourceKind,
    /// Ledger count for `kind` after crediting.
    pub total: u32,
}

/// Collects every drop strictly within `radius` of `player_pos`.
///
/// Each collected drop credits the ledger once and is destroyed.
pub fn collect_pickups(
    store: &mut EntityStore,
    ledger: &mut ResourceLedger,
    player_pos: Vec2,
    radius: f32,
) -> Vec<Pickup> {
    pickup_candidates(store, player_pos, radius)
        .into_iter()
        .filter_map(|(handle, kind)| {
            store.destroy(handle)?;
            let total = ledger.credit(kind);
            debug!(%handle, resource = kind.name(), total, "resource collected");
            Some(Pickup {
                handle,
                kind,
                total,
            })
        })
        .collect()
}
