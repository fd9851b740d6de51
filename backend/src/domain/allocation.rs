//! Room allocation engine.
//!
//! The engine turns a requested stay plus snapshots of the room inventory and
//! booking store into an allocation decision:
//! - first-fit room search over inclusive date ranges;
//! - booking creation with exactly one write on success;
//! - fully-occupied date reporting.
//!
//! Every call re-fetches both snapshots and nothing is cached. Decisions are
//! read-then-write without a transaction, so callers must serialise writers.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;

use crate::domain::ports::{BookingManager, BookingReadWriter, RoomReader};
use crate::domain::{
    AllocationError, Booking, BookingOutcome, DateRange, Entity as _, Room, RoomId, StayRequest,
};

/// Domain service implementing [`BookingManager`].
#[derive(Clone)]
pub struct AllocationEngine<R, B> {
    rooms: Arc<R>,
    bookings: Arc<B>,
    clock: Arc<dyn Clock>,
}

impl<R, B> AllocationEngine<R, B> {
    /// Create an engine over the given sources.
    ///
    /// The clock's local calendar date defines "today".
    pub fn new(rooms: Arc<R>, bookings: Arc<B>, clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms,
            bookings,
            clock,
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    fn ensure_future_start(&self, start: NaiveDate) -> Result<(), AllocationError> {
        let today = self.today();
        if start <= today {
            return Err(AllocationError::invalid_argument(format!(
                "start date {start} must be after today ({today})"
            )));
        }
        Ok(())
    }
}

impl<R, B> AllocationEngine<R, B>
where
    R: RoomReader,
    B: BookingReadWriter,
{
    fn snapshots(&self) -> Result<(Vec<Room>, Vec<Booking>), AllocationError> {
        let rooms = self.rooms.all_rooms()?;
        let bookings = self.bookings.all_bookings()?;
        Ok((rooms, bookings))
    }

    fn search(&self, stay: &DateRange) -> Result<Option<RoomId>, AllocationError> {
        let (rooms, bookings) = self.snapshots()?;
        Ok(first_free_room(&rooms, &bookings, stay))
    }
}

impl<R, B> BookingManager for AllocationEngine<R, B>
where
    R: RoomReader,
    B: BookingReadWriter,
{
    fn find_available_room(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<RoomId>, AllocationError> {
        ensure_ordered(start, end)?;
        self.ensure_future_start(start)?;
        self.search(&DateRange::new(start, end))
    }

    fn create_booking(&self, request: &StayRequest) -> Result<BookingOutcome, AllocationError> {
        ensure_ordered(request.start_date(), request.end_date())?;
        self.ensure_future_start(request.start_date())?;

        let Some(room_id) = self.search(&request.stay())? else {
            return Ok(BookingOutcome::NoRoomAvailable);
        };

        let booking = request.confirm(room_id);
        self.bookings.add(&booking)?;
        Ok(BookingOutcome::Created(booking))
    }

    fn fully_occupied_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, AllocationError> {
        let (rooms, bookings) = self.snapshots()?;
        Ok(fully_occupied(
            &rooms,
            &bookings,
            &DateRange::new(start, end),
        ))
    }
}

fn ensure_ordered(start: NaiveDate, end: NaiveDate) -> Result<(), AllocationError> {
    if end < start {
        return Err(AllocationError::invalid_argument(format!(
            "end date {end} precedes start date {start}"
        )));
    }
    Ok(())
}

fn first_free_room(rooms: &[Room], bookings: &[Booking], stay: &DateRange) -> Option<RoomId> {
    rooms
        .iter()
        .map(Room::id)
        .find(|room| !bookings.iter().any(|b| b.conflicts_with(*room, stay)))
}

fn fully_occupied(rooms: &[Room], bookings: &[Booking], window: &DateRange) -> Vec<NaiveDate> {
    if rooms.is_empty() || window.is_empty() {
        return Vec::new();
    }

    let inventory: HashSet<RoomId> = rooms.iter().map(Room::id).collect();
    let relevant: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.is_active && inventory.contains(&b.room_id) && b.stay().overlaps(window))
        .collect();

    window
        .days()
        .filter(|day| {
            let occupied: HashSet<RoomId> = relevant
                .iter()
                .filter(|b| b.covers(*day))
                .map(|b| b.room_id)
                .collect();
            occupied.len() == inventory.len()
        })
        .collect()
}

#[cfg(test)]
#[path = "allocation_tests/mod.rs"]
mod tests;
