//! # Spatial Queries
//!
//! Linear scans over the store, in slot order.

use abyx_shared::{ResourceKind, Vec2};

use super::entity::{Entity, EntityHandle};
use super::store::EntityStore;

/// Finds the entity nearest to `point` that satisfies `predicate`.
///
/// Only entities strictly closer than `max_radius` are candidates. A later
/// candidate replaces the current best only when strictly closer, so on an
/// exact tie the lowest slot index wins.
pub fn select_nearest<F>(
    store: &EntityStore,
    point: Vec2,
    max_radius: f32,
    mut predicate: F,
) -> Option<EntityHandle>
where
    F: FnMut(&Entity) -> bool,
{
    let mut best: Option<(EntityHandle, f32)> = None;

    for (handle, entity) in store.iter() {
        if !predicate(entity) {
            continue;
        }
        let distance = entity.position.distance(point);
        if distance >= max_radius {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((handle, distance)),
        }
    }

    best.map(|(handle, _)| handle)
}

/// Every resource drop strictly closer than `radius` to `player_pos`.
#[must_use]
pub fn pickup_candidates(
    store: &EntityStore,
    player_pos: Vec2,
    radius: f32,
) -> Vec<(EntityHandle, ResourceKind)> {
    store
        .iter()
        .filter_map(|(handle, entity)| {
            let kind = entity.resource_kind()?;
            (entity.position.distance(player_pos) < radius).then_some((handle, kind))
        })
        .collect()
}
