//! JSON inventory snapshots for seeding the in-memory adapters.
//!
//! A snapshot file looks like:
//!
//! ```json
//! {
//!   "rooms": [{ "id": 1 }, { "id": 2 }],
//!   "bookings": [
//!     { "id": 1, "startDate": "2030-01-02", "endDate": "2030-01-04",
//!       "isActive": true, "customerId": 7, "roomId": 1 }
//!   ]
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::memory::{InMemoryBookingRepository, InMemoryRoomRepository};
use crate::domain::ports::{BookingSourceError, RoomSourceError};
use crate::domain::{Booking, Room};

/// Errors raised while loading or applying a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be opened or read.
    #[error("failed to read snapshot '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The snapshot file is not a valid inventory document.
    #[error("invalid snapshot '{}': {source}", path.display())]
    Json {
        /// Path that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// The snapshot lists the same room twice.
    #[error(transparent)]
    Rooms(#[from] RoomSourceError),
    /// The snapshot lists the same booking twice.
    #[error(transparent)]
    Bookings(#[from] BookingSourceError),
}

/// Rooms and bookings captured at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// Room inventory in allocation order.
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Every booking, active or not.
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl InventorySnapshot {
    /// Parse a snapshot from JSON text. `origin` labels errors.
    pub fn from_json(text: &str, origin: &Path) -> Result<Self, SnapshotError> {
        serde_json::from_str(text).map_err(|source| SnapshotError::Json {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Build in-memory repositories seeded with this snapshot.
    pub fn into_repositories(
        self,
    ) -> Result<(InMemoryRoomRepository, InMemoryBookingRepository), SnapshotError> {
        let rooms = InMemoryRoomRepository::with_rooms(self.rooms)?;
        let bookings = InMemoryBookingRepository::with_bookings(self.bookings)?;
        Ok((rooms, bookings))
    }
}

/// Read and parse the snapshot at `path`.
pub fn load_snapshot(path: &Path) -> Result<InventorySnapshot, SnapshotError> {
    let io_error = |source: io::Error| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };
    let parent = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        io_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "snapshot path must name a file",
        ))
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
    let text = dir.read_to_string(file_name).map_err(io_error)?;
    let snapshot = InventorySnapshot::from_json(&text, path)?;
    debug!(
        path = %path.display(),
        rooms = snapshot.rooms.len(),
        bookings = snapshot.bookings.len(),
        "loaded inventory snapshot"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    //! Loading snapshots from disk.

    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{BookingReadWriter, RoomReader};
    use crate::test_support::snapshot_files::write_snapshot;

    const TWO_ROOMS: &str = r#"{
        "rooms": [{ "id": 2 }, { "id": 1 }],
        "bookings": [
            { "id": 5, "startDate": "2030-01-02", "endDate": "2030-01-04",
              "isActive": true, "customerId": 7, "roomId": 1 }
        ]
    }"#;

    #[rstest]
    fn loads_rooms_and_bookings_in_file_order() {
        let file = write_snapshot(TWO_ROOMS).expect("write snapshot");

        let snapshot = load_snapshot(file.path()).expect("load snapshot");
        let (rooms, bookings) = snapshot.into_repositories().expect("seed repositories");

        let room_ids: Vec<i32> = rooms
            .all_rooms()
            .expect("read rooms")
            .iter()
            .map(|r| crate::domain::Entity::id(r).get())
            .collect();
        assert_eq!(room_ids, vec![2, 1]);
        assert_eq!(bookings.all_bookings().expect("read bookings").len(), 1);
    }

    #[rstest]
    fn missing_sections_default_to_empty() {
        let snapshot =
            InventorySnapshot::from_json("{}", Path::new("inline")).expect("parse snapshot");
        assert_eq!(snapshot, InventorySnapshot::default());
    }

    #[rstest]
    fn malformed_json_names_the_file() {
        let file = write_snapshot("{ rooms: ").expect("write snapshot");

        let err = load_snapshot(file.path()).expect_err("parse should fail");

        assert!(matches!(err, SnapshotError::Json { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[rstest]
    fn missing_file_is_an_io_error() {
        let err = load_snapshot(Path::new("/nonexistent/inventory.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[rstest]
    fn duplicate_rooms_are_rejected_when_seeding() {
        let snapshot = InventorySnapshot::from_json(
            r#"{ "rooms": [{ "id": 1 }, { "id": 1 }] }"#,
            Path::new("inline"),
        )
        .expect("parse snapshot");

        let err = snapshot
            .into_repositories()
            .expect_err("duplicate room should fail");
        assert!(matches!(err, SnapshotError::Rooms(_)));
    }
}
