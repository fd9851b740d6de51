//! Date validation runs before any source is touched.

use rstest::rstest;

use super::*;
use crate::domain::ports::BookingManager;
use crate::domain::{AllocationError, ErrorCode, StayRequest};

fn untouched_engine() -> AllocationEngine<MockRoomReader, MockBookingReadWriter> {
    let mut rooms = MockRoomReader::new();
    rooms.expect_all_rooms().times(0);
    let mut bookings = MockBookingReadWriter::new();
    bookings.expect_all_bookings().times(0);
    bookings.expect_add().times(0);
    make_engine(rooms, bookings)
}

fn assert_invalid_argument(error: &AllocationError) {
    assert_eq!(error.code(), ErrorCode::InvalidArgument);
    assert!(matches!(error, AllocationError::InvalidArgument { .. }));
}

#[rstest]
#[case::today(0)]
#[case::yesterday(-1)]
#[case::last_year(-365)]
fn find_available_room_rejects_start_not_in_future(#[case] start: i64) {
    let engine = untouched_engine();

    let error = engine
        .find_available_room(day(start), day(start))
        .expect_err("start must be after today");

    assert_invalid_argument(&error);
}

#[rstest]
#[case::today(0, 0)]
#[case::today_to_future(0, 5)]
#[case::past(-1, 0)]
fn create_booking_rejects_start_not_in_future(#[case] start: i64, #[case] end: i64) {
    let engine = untouched_engine();

    let error = engine
        .create_booking(&StayRequest::new(day(start), day(end)))
        .expect_err("start must be after today");

    assert_invalid_argument(&error);
}

#[rstest]
#[case::one_day_inverted(5, 4)]
#[case::far_future_inverted(30, 10)]
fn create_booking_rejects_end_before_start(#[case] start: i64, #[case] end: i64) {
    let engine = untouched_engine();

    let error = engine
        .create_booking(&StayRequest::new(day(start), day(end)))
        .expect_err("end must not precede start");

    assert_invalid_argument(&error);
    assert!(error.to_string().contains("precedes"));
}

#[rstest]
fn find_available_room_rejects_end_before_start() {
    let engine = untouched_engine();

    let error = engine
        .find_available_room(day(7), day(5))
        .expect_err("end must not precede start");

    assert_invalid_argument(&error);
}

#[rstest]
fn tomorrow_is_the_earliest_valid_start() {
    let engine = make_engine(room_reader(rooms(&[1])), booking_store(Vec::new()));

    let room = engine
        .find_available_room(day(1), day(1))
        .expect("tomorrow is in the future");

    assert_eq!(room, Some(RoomId::new(1)));
}
