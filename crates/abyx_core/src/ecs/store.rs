//! # Entity Store
//!
//! Fixed-capacity slot array. All slots are allocated at creation; a slot is
//! either empty or holds one fully constructed [`Entity`].

use tracing::debug;

use super::entity::{Entity, EntityHandle};
use crate::error::{CoreError, CoreResult};

/// One slot of the pool.
#[derive(Clone, Debug, Default)]
struct Slot {
    /// Bumped every time the slot is emptied.
    generation: u32,
    entity: Option<Entity>,
}

/// The entity pool.
///
/// # Capacity
///
/// The capacity is fixed at creation. Allocation scans for the lowest free
/// slot; a destroyed slot is immediately eligible for reuse, and handles to
/// its previous occupant stop resolving.
///
/// # Example
///
/// ```rust
/// use abyx_core::{Entity, EntityStore};
/// use abyx_shared::Vec2;
///
/// let mut store = EntityStore::new(16);
/// let tree = store.allocate(Entity::tree(Vec2::ZERO, 3)).unwrap();
/// assert!(store.is_alive(tree));
/// store.destroy(tree);
/// assert!(store.get(tree).is_none());
/// ```
pub struct EntityStore {
    slots: Box<[Slot]>,
    alive_count: usize,
}

impl EntityStore {
    /// Creates a store with `capacity` empty slots.
    ///
    /// # Panics
    ///
    /// Panics if capacity is zero or exceeds `u32::MAX`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");
        assert!(
            u32::try_from(capacity).is_ok(),
            "Capacity cannot exceed u32::MAX"
        );

        let slots = (0..capacity)
            .map(|_| Slot::default())
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            slots,
            alive_count: 0,
        }
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    #[inline]
    #[must_use]
    pub const fn alive_count(&self) -> usize {
        self.alive_count
    }

    /// Moves `entity` into the lowest free slot.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::PoolExhausted`] when every slot is occupied.
    pub fn allocate(&mut self, entity: Entity) -> CoreResult<EntityHandle> {
        let Some(index) = self.slots.iter().position(|slot| slot.entity.is_none()) else {
            return Err(CoreError::PoolExhausted {
                capacity: self.capacity(),
            });
        };

        let slot = &mut self.slots[index];
        slot.entity = Some(entity);
        self.alive_count += 1;

        let handle = EntityHandle::new(index as u32, slot.generation);
        debug!(%handle, kind = entity.kind.name(), "entity allocated");
        Ok(handle)
    }

    /// Empties the slot `handle` refers to.
    ///
    /// Returns the removed entity, or `None` if the handle was stale.
    pub fn destroy(&mut self, handle: EntityHandle) -> Option<Entity> {
        let slot = self.slot_mut(handle)?;
        let entity = slot.entity.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.alive_count -= 1;

        debug!(%handle, kind = entity.kind.name(), "entity destroyed");
        Some(entity)
    }

    /// Returns `true` if `handle` still refers to a live entity.
    #[inline]
    #[must_use]
    pub fn is_alive(&self, handle: EntityHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Looks up a live entity.
    #[inline]
    #[must_use]
    pub fn get(&self, handle: EntityHandle) -> Option<&Entity> {
        let slot = self.slots.get(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.entity.as_ref()
    }

    /// Looks up a live entity mutably.
    #[inline]
    pub fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut Entity> {
        self.slot_mut(handle)?.entity.as_mut()
    }

    /// Handle of whatever currently occupies slot `index`.
    #[must_use]
    pub fn handle_at(&self, index: usize) -> Option<EntityHandle> {
        let slot = self.slots.get(index)?;
        slot.entity
            .as_ref()
            .map(|_| EntityHandle::new(index as u32, slot.generation))
    }

    /// Handles of all live entities, in slot order.
    pub fn handles(&self) -> impl Iterator<Item = EntityHandle> + '_ {
        self.iter().map(|(handle, _)| handle)
    }

    /// Iterates over all live entities, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityHandle, &Entity)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.entity
                .as_ref()
                .map(|entity| (EntityHandle::new(index as u32, slot.generation), entity))
        })
    }

    /// Iterates mutably over all live entities, in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityHandle, &mut Entity)> {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation = slot.generation;
            slot.entity
                .as_mut()
                .map(|entity| (EntityHandle::new(index as u32, generation), entity))
        })
    }

    /// Destroys every entity. Outstanding handles become stale.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            if slot.entity.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
        }
        self.alive_count = 0;
    }

    fn slot_mut(&mut self, handle: EntityHandle) -> Option<&mut Slot> {
        let slot = self.slots.get_mut(handle.index() as usize)?;
        (slot.generation == handle.generation()).then_some(slot)
    }
}
