//! In-memory booking store.

use tracing::debug;

use super::{EntityStore, StoreFault};
use crate::domain::ports::{BookingReadWriter, BookingSourceError, Repository};
use crate::domain::{Booking, BookingId};

fn map_fault(fault: StoreFault<BookingId>) -> BookingSourceError {
    match fault {
        StoreFault::Duplicate(id) => {
            debug!(booking_id = %id, "rejected duplicate booking");
            BookingSourceError::conflict(id)
        }
        StoreFault::Missing(id) => BookingSourceError::not_found(id),
        StoreFault::Poisoned => BookingSourceError::query("booking store lock poisoned"),
    }
}

/// Bookings held in memory, in insertion order.
///
/// Writes made through [`BookingReadWriter::add`] and [`Repository::add`]
/// share the same duplicate-identifier check.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    store: EntityStore<Booking>,
}

impl InMemoryBookingRepository {
    /// Create an empty booking store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, rejecting duplicate booking identifiers.
    pub fn with_bookings(bookings: Vec<Booking>) -> Result<Self, BookingSourceError> {
        let store = EntityStore::with_entries(bookings).map_err(map_fault)?;
        Ok(Self { store })
    }
}

impl BookingReadWriter for InMemoryBookingRepository {
    fn all_bookings(&self) -> Result<Vec<Booking>, BookingSourceError> {
        self.store.snapshot().map_err(map_fault)
    }

    fn add(&self, booking: &Booking) -> Result<(), BookingSourceError> {
        Repository::add(self, booking.clone())
    }
}

impl Repository<Booking> for InMemoryBookingRepository {
    type Error = BookingSourceError;

    fn get_all(&self) -> Result<Vec<Booking>, Self::Error> {
        self.store.snapshot().map_err(map_fault)
    }

    fn get(&self, id: BookingId) -> Result<Option<Booking>, Self::Error> {
        self.store.find(id).map_err(map_fault)
    }

    fn add(&self, booking: Booking) -> Result<(), Self::Error> {
        let id = booking.id;
        let room_id = booking.room_id;
        self.store.insert(booking).map_err(map_fault)?;
        debug!(booking_id = %id, room_id = %room_id, "booking recorded");
        Ok(())
    }

    fn edit(&self, booking: Booking) -> Result<(), Self::Error> {
        let id = booking.id;
        self.store.replace(booking).map_err(map_fault)?;
        debug!(booking_id = %id, "booking updated");
        Ok(())
    }

    fn remove(&self, id: BookingId) -> Result<(), Self::Error> {
        self.store.delete(id).map_err(map_fault)?;
        debug!(booking_id = %id, "booking removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! CRUD and snapshot behaviour of the in-memory booking store.

    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{CustomerId, RoomId};

    fn booking(id: i32, room: i32) -> Booking {
        let start = NaiveDate::from_ymd_opt(2030, 2, 1).expect("valid fixture date");
        Booking {
            id: BookingId::new(id),
            start_date: start,
            end_date: start,
            is_active: true,
            customer_id: CustomerId::new(1),
            room_id: RoomId::new(room),
        }
    }

    #[fixture]
    fn repo() -> InMemoryBookingRepository {
        InMemoryBookingRepository::with_bookings(vec![booking(1, 1), booking(2, 2)])
            .expect("seed bookings")
    }

    #[rstest]
    fn port_writes_append_to_the_snapshot(repo: InMemoryBookingRepository) {
        BookingReadWriter::add(&repo, &booking(3, 1)).expect("add booking");

        let ids: Vec<i32> = repo
            .all_bookings()
            .expect("read bookings")
            .iter()
            .map(|b| b.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[rstest]
    fn duplicate_ids_conflict_on_either_write_path(repo: InMemoryBookingRepository) {
        assert_eq!(
            BookingReadWriter::add(&repo, &booking(1, 2)),
            Err(BookingSourceError::conflict(1))
        );
        assert_eq!(
            Repository::add(&repo, booking(2, 1)),
            Err(BookingSourceError::conflict(2))
        );
        assert_eq!(repo.get_all().expect("read bookings").len(), 2);
    }

    #[rstest]
    fn cancelling_a_booking_via_edit(repo: InMemoryBookingRepository) {
        let mut cancelled = booking(1, 1);
        cancelled.is_active = false;

        repo.edit(cancelled.clone()).expect("edit booking");

        assert_eq!(
            repo.get(BookingId::new(1)).expect("lookup"),
            Some(cancelled)
        );
    }

    #[rstest]
    fn unknown_ids_are_not_found(repo: InMemoryBookingRepository) {
        assert_eq!(repo.get(BookingId::new(9)).expect("lookup"), None);
        assert_eq!(
            repo.edit(booking(9, 1)),
            Err(BookingSourceError::not_found(9))
        );
        assert_eq!(
            repo.remove(BookingId::new(9)),
            Err(BookingSourceError::not_found(9))
        );
    }

    #[rstest]
    fn removal_preserves_remaining_order(repo: InMemoryBookingRepository) {
        Repository::add(&repo, booking(3, 3)).expect("add booking");

        repo.remove(BookingId::new(2)).expect("remove booking");

        assert_eq!(
            repo.get_all().expect("read bookings"),
            vec![booking(1, 1), booking(3, 3)]
        );
    }
}
