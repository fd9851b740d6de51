//! In-memory room inventory.

use tracing::debug;

use super::{EntityStore, StoreFault};
use crate::domain::ports::{Repository, RoomReader, RoomSourceError};
use crate::domain::{Entity as _, Room, RoomId};

fn map_fault(fault: StoreFault<RoomId>) -> RoomSourceError {
    match fault {
        StoreFault::Duplicate(id) => {
            debug!(room_id = %id, "rejected duplicate room");
            RoomSourceError::conflict(id)
        }
        StoreFault::Missing(id) => RoomSourceError::not_found(id),
        StoreFault::Poisoned => RoomSourceError::query("room store lock poisoned"),
    }
}

/// Room inventory held in memory, in insertion order.
///
/// # Examples
/// ```
/// use hotel_booking::domain::{Room, RoomId};
/// use hotel_booking::domain::ports::RoomReader;
/// use hotel_booking::outbound::memory::InMemoryRoomRepository;
///
/// let repo = InMemoryRoomRepository::with_rooms(vec![Room::new(RoomId::new(1))])?;
/// assert_eq!(repo.all_rooms()?.len(), 1);
/// # Ok::<(), hotel_booking::domain::ports::RoomSourceError>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    store: EntityStore<Room>,
}

impl InMemoryRoomRepository {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the inventory, rejecting duplicate room identifiers.
    pub fn with_rooms(rooms: Vec<Room>) -> Result<Self, RoomSourceError> {
        let store = EntityStore::with_entries(rooms).map_err(map_fault)?;
        Ok(Self { store })
    }
}

impl RoomReader for InMemoryRoomRepository {
    fn all_rooms(&self) -> Result<Vec<Room>, RoomSourceError> {
        self.store.snapshot().map_err(map_fault)
    }
}

impl Repository<Room> for InMemoryRoomRepository {
    type Error = RoomSourceError;

    fn get_all(&self) -> Result<Vec<Room>, Self::Error> {
        self.store.snapshot().map_err(map_fault)
    }

    fn get(&self, id: RoomId) -> Result<Option<Room>, Self::Error> {
        self.store.find(id).map_err(map_fault)
    }

    fn add(&self, room: Room) -> Result<(), Self::Error> {
        let id = room.id();
        self.store.insert(room).map_err(map_fault)?;
        debug!(room_id = %id, "room added");
        Ok(())
    }

    fn edit(&self, room: Room) -> Result<(), Self::Error> {
        self.store.replace(room).map_err(map_fault)
    }

    fn remove(&self, id: RoomId) -> Result<(), Self::Error> {
        self.store.delete(id).map_err(map_fault)?;
        debug!(room_id = %id, "room removed");
        Ok(())
    }
}
