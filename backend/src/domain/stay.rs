//! Stay requests and allocation outcomes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Booking, BookingId, CustomerId, DateRange, RoomId};

/// Immutable request for a stay, before any room is allocated.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use hotel_booking::domain::{CustomerId, StayRequest};
///
/// let start = NaiveDate::from_ymd_opt(2030, 5, 1).expect("valid date");
/// let end = NaiveDate::from_ymd_opt(2030, 5, 3).expect("valid date");
/// let request = StayRequest::new(start, end).with_customer(CustomerId::new(42));
/// assert_eq!(request.stay().days().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayRequest {
    booking_id: BookingId,
    customer_id: CustomerId,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl StayRequest {
    /// Request a stay over `[start_date, end_date]`.
    ///
    /// Booking and customer identifiers default to zero.
    #[must_use]
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            booking_id: BookingId::new(0),
            customer_id: CustomerId::new(0),
            start_date,
            end_date,
        }
    }

    /// Set the identifier the confirmed booking will carry.
    #[must_use]
    pub const fn with_booking_id(mut self, booking_id: BookingId) -> Self {
        self.booking_id = booking_id;
        self
    }

    /// Set the customer the confirmed booking will belong to.
    #[must_use]
    pub const fn with_customer(mut self, customer_id: CustomerId) -> Self {
        self.customer_id = customer_id;
        self
    }

    /// First night requested.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last night requested.
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Requested dates as a range.
    #[must_use]
    pub const fn stay(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Turn the request into an active booking holding `room_id`.
    #[must_use]
    pub const fn confirm(&self, room_id: RoomId) -> Booking {
        Booking {
            id: self.booking_id,
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: true,
            customer_id: self.customer_id,
            room_id,
        }
    }
}

/// Result of asking the engine to create a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// A room was allocated and the booking persisted.
    Created(Booking),
    /// Every room conflicts with the requested dates. Nothing was written.
    NoRoomAvailable,
}

impl BookingOutcome {
    /// True when a booking was persisted.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Room assigned to the confirmed booking, if any.
    #[must_use]
    pub const fn room_id(&self) -> Option<RoomId> {
        match self {
            Self::Created(booking) => Some(booking.room_id),
            Self::NoRoomAvailable => None,
        }
    }

    /// The confirmed booking, if any.
    #[must_use]
    pub const fn booking(&self) -> Option<&Booking> {
        match self {
            Self::Created(booking) => Some(booking),
            Self::NoRoomAvailable => None,
        }
    }
}
