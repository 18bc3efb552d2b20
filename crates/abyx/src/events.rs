//! # Gameplay Events
//!
//! The pipeline reports what happened through a bounded crossbeam channel so
//! observers (audio, logs, the sandbox summary) never reach into the world.
//!
//! ```text
//! Interact / Pickup / Hud ──► EventSender ──► channel ──► EventReceiver
//! ```
//!
//! Sending never blocks: when the channel is full the event is dropped and
//! the tick goes on.

use abyx_core::{EntityHandle, EntityKind};
use abyx_shared::{ResourceKind, StructureKind, Vec2};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Default channel capacity.
pub const EVENT_CAPACITY: usize = 1024;

/// Something observable that happened during a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    /// An entity entered the world.
    EntitySpawned {
        /// New entity.
        handle: EntityHandle,
        /// What it is.
        kind: EntityKind,
        /// Where it appeared.
        position: Vec2,
    },

    /// A destructible entity took a hit and survived.
    EntityDamaged {
        /// Entity hit.
        handle: EntityHandle,
        /// Health after the hit.
        health_remaining: i32,
    },

    /// A destructible entity reached zero health and was removed.
    EntityDepleted {
        /// Removed entity.
        handle: EntityHandle,
        /// Where it stood.
        position: Vec2,
        /// Resource it yields.
        yield_kind: ResourceKind,
        /// Spawned drop, if the pool had room.
        drop: Option<EntityHandle>,
    },

    /// The player picked up a drop.
    ResourceCollected {
        /// Removed drop.
        handle: EntityHandle,
        /// Resource kind.
        kind: ResourceKind,
        /// Ledger count after crediting.
        total: u32,
    },

    /// A structure was built from the palette.
    StructurePlaced {
        /// New structure entity.
        handle: EntityHandle,
        /// Structure type.
        kind: StructureKind,
        /// Snapped tile position.
        position: Vec2,
    },
}

/// Owns both ends of the event channel.
pub struct EventBus {
    sender: Sender<GameEvent>,
    receiver: Receiver<GameEvent>,
}

impl EventBus {
    /// Creates a bus holding at most `capacity` undelivered events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// A producer handle.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// A consumer handle. Consumers share one queue.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(EVENT_CAPACITY)
    }
}

/// Handle for sending events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<GameEvent>,
}

impl EventSender {
    /// Sends without blocking. Returns `false` if the event was dropped.
    #[inline]
    pub fn send(&self, event: GameEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for receiving events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<GameEvent>,
}

impl EventReceiver {
    /// Takes every pending event.
    #[must_use]
    pub fn drain(&self) -> Vec<GameEvent> {
        self.receiver.try_iter().collect()
    }

    /// Takes one pending event.
    #[inline]
    #[must_use]
    pub fn try_recv(&self) -> Option<GameEvent> {
        self.receiver.try_recv().ok()
    }

    /// Number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn damaged(health_remaining: i32) -> GameEvent {
        GameEvent::EntityDamaged {
            handle: EntityHandle::new(3, 0),
            health_remaining,
        }
    }

    #[test]
    fn test_events_arrive_in_order() {
        let bus = EventBus::new(8);
        let sender = bus.sender();
        let receiver = bus.receiver();

        assert!(sender.send(damaged(2)));
        assert!(sender.send(damaged(1)));
        assert_eq!(receiver.pending_count(), 2);
        assert_eq!(receiver.drain(), vec![damaged(2), damaged(1)]);
        assert_eq!(receiver.try_recv(), None);
    }

    #[test]
    fn test_full_channel_drops() {
        let bus = EventBus::new(1);
        let sender = bus.sender();
        assert!(sender.send(damaged(2)));
        assert!(!sender.send(damaged(1)));
        assert_eq!(bus.receiver().drain(), vec![damaged(2)]);
    }
}
