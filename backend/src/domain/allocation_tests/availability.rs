//! First-fit room search over inclusive date ranges.

use rstest::rstest;

use super::*;
use crate::domain::ports::{BookingManager, BookingSourceError, RoomSourceError};
use crate::domain::{AllocationError, ErrorCode};

#[rstest]
fn single_room_booked_over_request_yields_no_room() {
    let engine = make_engine(
        room_reader(rooms(&[1])),
        booking_store(vec![active_booking(1, 1, 10, 20)]),
    );

    let room = engine
        .find_available_room(day(4), day(18))
        .expect("search should succeed");

    assert_eq!(room, None);
}

#[rstest]
fn single_free_room_is_returned() {
    let engine = make_engine(room_reader(rooms(&[1])), booking_store(Vec::new()));

    let room = engine
        .find_available_room(day(19), day(19))
        .expect("search should succeed");

    assert_eq!(room, Some(RoomId::new(1)));
}

#[rstest]
fn second_room_is_used_when_first_is_taken() {
    let engine = make_engine(
        room_reader(rooms(&[1, 2])),
        booking_store(vec![active_booking(1, 1, 1, 5)]),
    );

    let room = engine
        .find_available_room(day(2), day(4))
        .expect("search should succeed");

    assert_eq!(room, Some(RoomId::new(2)));
}

// Existing booking holds room 1 for days 4-18.
#[rstest]
#[case::before_booking(3, 3, true)]
#[case::ends_on_first_booked_day(3, 4, false)]
#[case::first_booked_day(4, 4, false)]
#[case::last_booked_day(18, 18, false)]
#[case::starts_on_last_booked_day(18, 19, false)]
#[case::after_booking(19, 19, true)]
#[case::spanning_booking(2, 25, false)]
fn booking_bounds_are_inclusive(#[case] start: i64, #[case] end: i64, #[case] free: bool) {
    let engine = make_engine(
        room_reader(rooms(&[1])),
        booking_store(vec![active_booking(1, 1, 4, 18)]),
    );

    let room = engine
        .find_available_room(day(start), day(end))
        .expect("search should succeed");

    assert_eq!(room.is_some(), free);
}

#[rstest]
fn inactive_bookings_do_not_block_rooms() {
    let mut cancelled = active_booking(1, 1, 1, 30);
    cancelled.is_active = false;
    let engine = make_engine(room_reader(rooms(&[1])), booking_store(vec![cancelled]));

    let room = engine
        .find_available_room(day(5), day(6))
        .expect("search should succeed");

    assert_eq!(room, Some(RoomId::new(1)));
}

#[rstest]
fn empty_inventory_yields_no_room() {
    let engine = make_engine(room_reader(Vec::new()), booking_store(Vec::new()));

    let room = engine
        .find_available_room(day(1), day(3))
        .expect("search should succeed");

    assert_eq!(room, None);
}

#[rstest]
fn rooms_are_tried_in_inventory_order() {
    let engine = make_engine(
        room_reader(rooms(&[7, 3, 5])),
        booking_store(vec![active_booking(1, 7, 1, 10)]),
    );

    let room = engine
        .find_available_room(day(2), day(3))
        .expect("search should succeed");

    assert_eq!(room, Some(RoomId::new(3)));
}

#[rstest]
fn bookings_for_other_rooms_are_ignored() {
    let engine = make_engine(
        room_reader(rooms(&[1])),
        booking_store(vec![active_booking(1, 2, 1, 10)]),
    );

    let room = engine
        .find_available_room(day(2), day(3))
        .expect("search should succeed");

    assert_eq!(room, Some(RoomId::new(1)));
}

#[rstest]
fn repeated_search_is_idempotent() {
    let engine = make_engine(
        room_reader(rooms(&[1, 2])),
        booking_store(vec![active_booking(1, 1, 1, 5)]),
    );

    let first = engine.find_available_room(day(2), day(4));
    let second = engine.find_available_room(day(2), day(4));

    assert_eq!(first, second);
}

#[rstest]
fn every_search_refetches_both_snapshots() {
    let mut rooms_source = MockRoomReader::new();
    rooms_source
        .expect_all_rooms()
        .times(2)
        .returning(|| Ok(rooms(&[1])));
    let mut bookings = MockBookingReadWriter::new();
    bookings
        .expect_all_bookings()
        .times(2)
        .returning(|| Ok(Vec::new()));
    let engine = make_engine(rooms_source, bookings);

    for _ in 0..2 {
        engine
            .find_available_room(day(1), day(2))
            .expect("search should succeed");
    }
}

#[rstest]
fn room_source_failures_propagate_unchanged() {
    let mut rooms_source = MockRoomReader::new();
    rooms_source
        .expect_all_rooms()
        .times(1)
        .returning(|| Err(RoomSourceError::connection("inventory offline")));
    let engine = make_engine(rooms_source, booking_store(Vec::new()));

    let error = engine
        .find_available_room(day(1), day(2))
        .expect_err("room source failure should surface");

    assert_eq!(
        error,
        AllocationError::RoomSource(RoomSourceError::connection("inventory offline"))
    );
}

#[rstest]
fn booking_source_failures_propagate_unchanged() {
    let mut bookings = MockBookingReadWriter::new();
    bookings
        .expect_all_bookings()
        .times(1)
        .returning(|| Err(BookingSourceError::query("deadlock")));
    let engine = make_engine(room_reader(rooms(&[1])), bookings);

    let error = engine
        .find_available_room(day(1), day(2))
        .expect_err("booking source failure should surface");

    assert_eq!(error.to_string(), "booking source query failed: deadlock");
    assert_eq!(error.code(), ErrorCode::BookingSourceUnavailable);
}

#[rstest]
fn fixture_sources_offer_no_rooms() {
    use crate::domain::ports::{FixtureBookingReadWriter, FixtureRoomReader};
    use crate::domain::{BookingOutcome, StayRequest};

    let engine = AllocationEngine::new(
        Arc::new(FixtureRoomReader),
        Arc::new(FixtureBookingReadWriter),
        FixtureClock::shared(today()),
    );

    let room = engine
        .find_available_room(day(1), day(2))
        .expect("search should succeed");
    let outcome = engine
        .create_booking(&StayRequest::new(day(1), day(2)))
        .expect("creation should not fail");

    assert_eq!(room, None);
    assert_eq!(outcome, BookingOutcome::NoRoomAvailable);
}
