//! Room inventory model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Entity;

/// Integer room identifier, unique within an inventory snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(i32);

impl RoomId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for RoomId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// A bookable room. Rooms carry identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
}

impl Room {
    /// Create a room with the given identifier.
    #[must_use]
    pub const fn new(id: RoomId) -> Self {
        Self { id }
    }
}

impl Entity for Room {
    type Id = RoomId;

    fn id(&self) -> RoomId {
        self.id
    }
}
