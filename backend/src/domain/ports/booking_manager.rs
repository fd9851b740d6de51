//! Driving port for room allocation and occupancy queries.

use chrono::NaiveDate;

use crate::domain::{AllocationError, BookingOutcome, RoomId, StayRequest};

/// Allocation use cases offered to inbound adapters.
#[cfg_attr(test, mockall::automock)]
pub trait BookingManager: Send + Sync {
    /// Find the first room free for every date in `[start, end]`.
    ///
    /// Returns `Ok(None)` when no room is free. Fails with
    /// [`AllocationError::InvalidArgument`] when `end` precedes `start` or
    /// `start` is not after today.
    fn find_available_room(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<RoomId>, AllocationError>;

    /// Allocate a room for `request` and persist the confirmed booking.
    fn create_booking(&self, request: &StayRequest) -> Result<BookingOutcome, AllocationError>;

    /// Dates in `[start, end]` on which every room is held by an active
    /// booking, in chronological order.
    fn fully_occupied_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, AllocationError>;
}
