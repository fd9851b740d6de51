//! Booking creation: one write on success, none otherwise.

use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::ports::{BookingManager, BookingSourceError, RoomSourceError};
use crate::domain::{AllocationError, BookingOutcome, StayRequest};

fn request(start: i64, end: i64) -> StayRequest {
    StayRequest::new(day(start), day(end))
        .with_booking_id(BookingId::new(41))
        .with_customer(CustomerId::new(9))
}

#[rstest]
fn available_room_is_assigned_and_persisted_once() {
    let stay = request(2, 5);
    let expected = Booking {
        id: BookingId::new(41),
        start_date: day(2),
        end_date: day(5),
        is_active: true,
        customer_id: CustomerId::new(9),
        room_id: RoomId::new(1),
    };

    let mut bookings = booking_store(Vec::new());
    bookings
        .expect_add()
        .with(eq(expected.clone()))
        .times(1)
        .returning(|_| Ok(()));
    let engine = make_engine(room_reader(rooms(&[1, 2])), bookings);

    let outcome = engine.create_booking(&stay).expect("creation should succeed");

    assert!(outcome.is_created());
    assert_eq!(outcome, BookingOutcome::Created(expected));
}

#[rstest]
fn confirmed_booking_takes_the_room_search_result() {
    let mut bookings = booking_store(vec![active_booking(1, 1, 1, 10)]);
    bookings
        .expect_add()
        .withf(|booking| booking.room_id == RoomId::new(2) && booking.is_active)
        .times(1)
        .returning(|_| Ok(()));
    let engine = make_engine(room_reader(rooms(&[1, 2])), bookings);

    let found = engine
        .find_available_room(day(3), day(4))
        .expect("search should succeed");
    let outcome = engine
        .create_booking(&request(3, 4))
        .expect("creation should succeed");

    assert_eq!(outcome.room_id(), found);
    let booking = outcome.booking().expect("booking should be confirmed");
    assert_eq!(booking.start_date, day(3));
    assert_eq!(booking.end_date, day(4));
}

#[rstest]
fn no_available_room_returns_outcome_without_writing() {
    let mut bookings = booking_store(vec![active_booking(1, 1, 1, 5)]);
    bookings.expect_add().times(0);
    let engine = make_engine(room_reader(rooms(&[1])), bookings);

    let outcome = engine
        .create_booking(&request(1, 5))
        .expect("creation should not fail");

    assert_eq!(outcome, BookingOutcome::NoRoomAvailable);
    assert!(!outcome.is_created());
    assert_eq!(outcome.room_id(), None);
    assert!(outcome.booking().is_none());
}

#[rstest]
fn same_day_stay_can_be_booked() {
    let mut bookings = booking_store(Vec::new());
    bookings.expect_add().times(1).returning(|_| Ok(()));
    let engine = make_engine(room_reader(rooms(&[1])), bookings);

    let outcome = engine
        .create_booking(&request(19, 19))
        .expect("creation should succeed");

    assert_eq!(outcome.room_id(), Some(RoomId::new(1)));
}

#[rstest]
fn write_failures_propagate_unchanged() {
    let mut bookings = booking_store(Vec::new());
    bookings
        .expect_add()
        .times(1)
        .returning(|booking| Err(BookingSourceError::conflict(booking.id)));
    let engine = make_engine(room_reader(rooms(&[1])), bookings);

    let error = engine
        .create_booking(&request(2, 3))
        .expect_err("write failure should surface");

    assert_eq!(
        error,
        AllocationError::BookingSource(BookingSourceError::conflict(41))
    );
}

#[rstest]
fn read_failures_abort_before_writing() {
    let mut rooms_source = MockRoomReader::new();
    rooms_source
        .expect_all_rooms()
        .times(1)
        .returning(|| Err(RoomSourceError::query("inventory locked")));
    let mut bookings = MockBookingReadWriter::new();
    bookings.expect_all_bookings().times(0..=1).returning(|| Ok(Vec::new()));
    bookings.expect_add().times(0);
    let engine = make_engine(rooms_source, bookings);

    let error = engine
        .create_booking(&request(2, 3))
        .expect_err("read failure should surface");

    assert!(matches!(error, AllocationError::RoomSource(_)));
}
