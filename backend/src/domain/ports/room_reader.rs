//! Driven port for reading the room inventory.

use crate::domain::{Room, RoomId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by room inventory adapters.
    pub enum RoomSourceError {
        /// Repository connection could not be established.
        Connection { message: String } => "room source connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "room source query failed: {message}",
        /// A room with the same identifier already exists.
        Conflict { id: RoomId } => "room {id} already exists",
        /// No room exists with the given identifier.
        NotFound { id: RoomId } => "room {id} not found",
    }
}

/// Port exposing the current room inventory.
#[cfg_attr(test, mockall::automock)]
pub trait RoomReader: Send + Sync {
    /// Return every room in inventory order.
    ///
    /// An empty inventory is valid and means the hotel has no rooms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hotel_booking::domain::ports::{FixtureRoomReader, RoomReader};
    ///
    /// let rooms = FixtureRoomReader.all_rooms()?;
    /// assert!(rooms.is_empty());
    /// # Ok::<(), hotel_booking::domain::ports::RoomSourceError>(())
    /// ```
    fn all_rooms(&self) -> Result<Vec<Room>, RoomSourceError>;
}

/// Fixture room source with an empty inventory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRoomReader;

impl RoomReader for FixtureRoomReader {
    fn all_rooms(&self) -> Result<Vec<Room>, RoomSourceError> {
        Ok(Vec::new())
    }
}
