//! Shared test fixtures and module wiring for allocation engine unit tests.

use std::sync::Arc;

use chrono::NaiveDate;

use super::AllocationEngine;
use crate::domain::ports::{MockBookingReadWriter, MockRoomReader};
use crate::domain::{Booking, BookingId, CustomerId, Room, RoomId};
use crate::test_support::clock::FixtureClock;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 1).expect("valid fixture date")
}

/// Date `offset` days after the fixture's today.
pub(super) fn day(offset: i64) -> NaiveDate {
    FixtureClock::new(today()).days_from_today(offset)
}

pub(super) fn rooms(ids: &[i32]) -> Vec<Room> {
    ids.iter().map(|id| Room::new(RoomId::new(*id))).collect()
}

pub(super) fn active_booking(id: i32, room: i32, start: i64, end: i64) -> Booking {
    Booking {
        id: BookingId::new(id),
        start_date: day(start),
        end_date: day(end),
        is_active: true,
        customer_id: CustomerId::new(1),
        room_id: RoomId::new(room),
    }
}

pub(super) fn room_reader(inventory: Vec<Room>) -> MockRoomReader {
    let mut reader = MockRoomReader::new();
    reader
        .expect_all_rooms()
        .returning(move || Ok(inventory.clone()));
    reader
}

pub(super) fn booking_store(bookings: Vec<Booking>) -> MockBookingReadWriter {
    let mut store = MockBookingReadWriter::new();
    store
        .expect_all_bookings()
        .returning(move || Ok(bookings.clone()));
    store
}

pub(super) fn make_engine(
    rooms: MockRoomReader,
    bookings: MockBookingReadWriter,
) -> AllocationEngine<MockRoomReader, MockBookingReadWriter> {
    AllocationEngine::new(
        Arc::new(rooms),
        Arc::new(bookings),
        FixtureClock::shared(today()),
    )
}

mod availability;
mod create_booking;
mod occupancy;
mod properties;
mod validation;
