//! Fully-occupied date reporting.

use rstest::rstest;

use super::*;
use crate::domain::AllocationError;
use crate::domain::ports::{BookingManager, BookingSourceError, RoomSourceError};

fn jan(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).expect("valid fixture date")
}

fn booking_on(id: i32, room: i32, start: NaiveDate, end: NaiveDate) -> Booking {
    Booking {
        id: BookingId::new(id),
        start_date: start,
        end_date: end,
        is_active: true,
        customer_id: CustomerId::new(1),
        room_id: RoomId::new(room),
    }
}

#[rstest]
fn single_booked_day_in_past_range_is_reported() {
    let engine = make_engine(
        room_reader(rooms(&[1])),
        booking_store(vec![booking_on(1, 1, jan(2), jan(2))]),
    );

    let dates = engine
        .fully_occupied_dates(jan(1), jan(3))
        .expect("report should succeed");

    assert_eq!(dates, vec![jan(2)]);
}

#[rstest]
fn empty_inventory_is_never_full() {
    let engine = make_engine(
        room_reader(Vec::new()),
        booking_store(vec![booking_on(1, 1, jan(1), jan(31))]),
    );

    let dates = engine
        .fully_occupied_dates(jan(1), jan(31))
        .expect("report should succeed");

    assert!(dates.is_empty());
}

#[rstest]
fn only_days_with_every_room_taken_are_reported() {
    let engine = make_engine(
        room_reader(rooms(&[1, 2])),
        booking_store(vec![
            booking_on(1, 1, jan(1), jan(5)),
            booking_on(2, 2, jan(4), jan(8)),
        ]),
    );

    let dates = engine
        .fully_occupied_dates(jan(1), jan(10))
        .expect("report should succeed");

    assert_eq!(dates, vec![jan(4), jan(5)]);
}

#[rstest]
fn overlapping_bookings_for_one_room_count_once() {
    let engine = make_engine(
        room_reader(rooms(&[1, 2])),
        booking_store(vec![
            booking_on(1, 1, jan(1), jan(3)),
            booking_on(2, 1, jan(2), jan(4)),
        ]),
    );

    let dates = engine
        .fully_occupied_dates(jan(1), jan(5))
        .expect("report should succeed");

    assert!(dates.is_empty());
}

#[rstest]
fn inactive_bookings_and_unknown_rooms_do_not_count() {
    let mut cancelled = booking_on(1, 1, jan(1), jan(3));
    cancelled.is_active = false;
    let engine = make_engine(
        room_reader(rooms(&[1])),
        booking_store(vec![cancelled, booking_on(2, 99, jan(1), jan(3))]),
    );

    let dates = engine
        .fully_occupied_dates(jan(1), jan(3))
        .expect("report should succeed");

    assert!(dates.is_empty());
}

#[rstest]
fn dates_are_reported_in_chronological_order_within_range() {
    let engine = make_engine(
        room_reader(rooms(&[1])),
        booking_store(vec![
            booking_on(2, 1, jan(20), jan(25)),
            booking_on(1, 1, jan(1), jan(3)),
        ]),
    );

    let dates = engine
        .fully_occupied_dates(jan(2), jan(21))
        .expect("report should succeed");

    assert_eq!(dates, vec![jan(2), jan(3), jan(20), jan(21)]);
}

#[rstest]
fn inverted_range_reports_nothing() {
    let engine = make_engine(
        room_reader(rooms(&[1])),
        booking_store(vec![booking_on(1, 1, jan(1), jan(31))]),
    );

    let dates = engine
        .fully_occupied_dates(jan(10), jan(9))
        .expect("report should succeed");

    assert!(dates.is_empty());
}

#[rstest]
fn room_source_failure_surfaces_from_occupancy_report() {
    let mut rooms_source = MockRoomReader::new();
    rooms_source
        .expect_all_rooms()
        .times(1)
        .returning(|| Err(RoomSourceError::query("inventory table locked")));
    let engine = make_engine(rooms_source, booking_store(Vec::new()));

    let error = engine
        .fully_occupied_dates(jan(1), jan(3))
        .expect_err("room source failure should surface");

    assert_eq!(
        error,
        AllocationError::RoomSource(RoomSourceError::query("inventory table locked"))
    );
}

#[rstest]
fn booking_source_failure_surfaces_from_occupancy_report() {
    let mut bookings = MockBookingReadWriter::new();
    bookings
        .expect_all_bookings()
        .times(1)
        .returning(|| Err(BookingSourceError::connection("store unreachable")));
    let engine = make_engine(room_reader(rooms(&[1])), bookings);

    let error = engine
        .fully_occupied_dates(jan(1), jan(3))
        .expect_err("booking source failure should surface");

    assert_eq!(
        error,
        AllocationError::BookingSource(BookingSourceError::connection("store unreachable"))
    );
}

#[rstest]
fn window_ending_on_the_last_calendar_date_reports_it() {
    let last = NaiveDate::MAX;
    let before = last.pred_opt().expect("MAX has a predecessor");
    let engine = make_engine(
        room_reader(rooms(&[1])),
        booking_store(vec![booking_on(1, 1, before, last)]),
    );

    let dates = engine
        .fully_occupied_dates(before, last)
        .expect("report should succeed");

    assert_eq!(dates, vec![before, last]);
}
