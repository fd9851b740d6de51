//! Property coverage for allocation invariants over generated snapshots.

use std::sync::Arc;

use proptest::prelude::*;

use super::*;
use crate::domain::ports::{
    BookingManager, BookingReadWriter, BookingSourceError, RoomReader, RoomSourceError,
};
use crate::domain::{AllocationError, DateRange, Entity as _, StayRequest};

/// Fixed snapshot source shared by both ports.
#[derive(Debug, Clone)]
struct StaticSnapshot {
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
}

impl RoomReader for StaticSnapshot {
    fn all_rooms(&self) -> Result<Vec<Room>, RoomSourceError> {
        Ok(self.rooms.clone())
    }
}

impl BookingReadWriter for StaticSnapshot {
    fn all_bookings(&self) -> Result<Vec<Booking>, BookingSourceError> {
        Ok(self.bookings.clone())
    }

    fn add(&self, _booking: &Booking) -> Result<(), BookingSourceError> {
        Ok(())
    }
}

fn engine_over(snapshot: StaticSnapshot) -> AllocationEngine<StaticSnapshot, StaticSnapshot> {
    let shared = Arc::new(snapshot);
    AllocationEngine::new(
        Arc::clone(&shared),
        shared,
        FixtureClock::shared(today()),
    )
}

fn booking_strategy() -> impl Strategy<Value = Booking> {
    (1..=4_i32, 1..40_i64, 0..10_i64, any::<bool>()).prop_map(|(room, start, len, active)| {
        let mut booking = active_booking(0, room, start, start + len);
        booking.is_active = active;
        booking
    })
}

fn snapshot_strategy() -> impl Strategy<Value = StaticSnapshot> {
    (0..=4_i32, prop::collection::vec(booking_strategy(), 0..12)).prop_map(
        |(room_count, bookings)| StaticSnapshot {
            rooms: (1..=room_count).map(|id| Room::new(RoomId::new(id))).collect(),
            bookings,
        },
    )
}

proptest! {
    #[test]
    fn returned_room_has_no_overlapping_active_booking(
        snapshot in snapshot_strategy(),
        start in 1..45_i64,
        len in 0..8_i64,
    ) {
        let stay = DateRange::new(day(start), day(start + len));
        let engine = engine_over(snapshot.clone());

        let found = engine
            .find_available_room(stay.start(), stay.end())
            .expect("future search should succeed");

        let consistent = match found {
            Some(room) => !snapshot.bookings.iter().any(|b| b.conflicts_with(room, &stay)),
            None => snapshot.rooms.iter().all(|room| {
                snapshot
                    .bookings
                    .iter()
                    .any(|b| b.conflicts_with(room.id(), &stay))
            }),
        };
        prop_assert!(consistent, "search result disagrees with the snapshot: {:?}", found);
    }

    #[test]
    fn creation_agrees_with_search(
        snapshot in snapshot_strategy(),
        start in 1..45_i64,
        len in 0..8_i64,
    ) {
        let engine = engine_over(snapshot);

        let found = engine
            .find_available_room(day(start), day(start + len))
            .expect("future search should succeed");
        let outcome = engine
            .create_booking(&StayRequest::new(day(start), day(start + len)))
            .expect("future creation should succeed");

        prop_assert_eq!(outcome.room_id(), found);
        prop_assert_eq!(outcome.is_created(), found.is_some());
    }

    #[test]
    fn start_not_after_today_is_always_rejected(
        snapshot in snapshot_strategy(),
        start in -60..=0_i64,
        len in 0..8_i64,
    ) {
        let engine = engine_over(snapshot);

        let search = engine.find_available_room(day(start), day(start + len));
        let create = engine.create_booking(&StayRequest::new(day(start), day(start + len)));

        let search_rejected = matches!(search, Err(AllocationError::InvalidArgument { .. }));
        let create_rejected = matches!(create, Err(AllocationError::InvalidArgument { .. }));
        prop_assert!(search_rejected, "search must be rejected");
        prop_assert!(create_rejected, "creation must be rejected");
    }

    #[test]
    fn fully_occupied_dates_lie_in_range_and_are_strictly_ordered(
        snapshot in snapshot_strategy(),
        start in -10..40_i64,
        len in 0..20_i64,
    ) {
        let window = DateRange::new(day(start), day(start + len));
        let room_count = snapshot.rooms.len();
        let engine = engine_over(snapshot);

        let dates = engine
            .fully_occupied_dates(window.start(), window.end())
            .expect("report should succeed");

        let in_window = dates.iter().all(|d| window.contains(*d));
        let ordered = dates.windows(2).all(|pair| matches!(pair, [a, b] if a < b));
        prop_assert!(in_window, "dates outside the window: {:?}", dates);
        prop_assert!(ordered, "dates out of order: {:?}", dates);
        if room_count == 0 {
            prop_assert!(dates.is_empty(), "empty inventory reported {:?}", dates);
        }
    }
}
