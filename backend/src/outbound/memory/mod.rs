//! In-memory adapters for the room inventory and booking store.
//!
//! Both repositories keep entities in insertion order behind an `RwLock`, so
//! snapshots are stable between writes. They back the CLI and the behaviour
//! tests; production deployments plug in their own adapters.

mod booking_repository;
mod room_repository;

pub use booking_repository::InMemoryBookingRepository;
pub use room_repository::InMemoryRoomRepository;

use std::sync::RwLock;

use crate::domain::Entity;

/// Failure raised by [`EntityStore`] before it is mapped to a port error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoreFault<Id> {
    Duplicate(Id),
    Missing(Id),
    Poisoned,
}

/// Insertion-ordered entity storage shared by the in-memory repositories.
#[derive(Debug)]
struct EntityStore<T> {
    entries: RwLock<Vec<T>>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Entity + Clone> EntityStore<T> {
    fn with_entries(entries: Vec<T>) -> Result<Self, StoreFault<T::Id>> {
        let store = Self {
            entries: RwLock::new(Vec::with_capacity(entries.len())),
        };
        for entry in entries {
            store.insert(entry)?;
        }
        Ok(store)
    }

    fn snapshot(&self) -> Result<Vec<T>, StoreFault<T::Id>> {
        let entries = self.entries.read().map_err(|_| StoreFault::Poisoned)?;
        Ok(entries.clone())
    }

    fn find(&self, id: T::Id) -> Result<Option<T>, StoreFault<T::Id>> {
        let entries = self.entries.read().map_err(|_| StoreFault::Poisoned)?;
        Ok(entries.iter().find(|entry| entry.id() == id).cloned())
    }

    fn insert(&self, entity: T) -> Result<(), StoreFault<T::Id>> {
        let mut entries = self.entries.write().map_err(|_| StoreFault::Poisoned)?;
        let id = entity.id();
        if entries.iter().any(|entry| entry.id() == id) {
            return Err(StoreFault::Duplicate(id));
        }
        entries.push(entity);
        Ok(())
    }

    fn replace(&self, entity: T) -> Result<(), StoreFault<T::Id>> {
        let mut entries = self.entries.write().map_err(|_| StoreFault::Poisoned)?;
        let id = entity.id();
        let slot = entries
            .iter_mut()
            .find(|entry| entry.id() == id)
            .ok_or(StoreFault::Missing(id))?;
        *slot = entity;
        Ok(())
    }

    fn delete(&self, id: T::Id) -> Result<(), StoreFault<T::Id>> {
        let mut entries = self.entries.write().map_err(|_| StoreFault::Poisoned)?;
        let position = entries
            .iter()
            .position(|entry| entry.id() == id)
            .ok_or(StoreFault::Missing(id))?;
        entries.remove(position);
        Ok(())
    }
}
