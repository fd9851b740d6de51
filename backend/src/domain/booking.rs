//! Booking records and the identifiers they reference.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DateRange, Entity, RoomId};

macro_rules! impl_i32_newtype {
    ($t:ident) => {
        impl $t {
            /// Wrap a raw identifier.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Access the raw identifier.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i32> for $t {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }
    };
}

/// Booking identifier chosen by the caller that owns the booking store.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BookingId(i32);

/// Identifier of the customer a booking belongs to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CustomerId(i32);

impl_i32_newtype!(BookingId);
impl_i32_newtype!(CustomerId);

/// A stay in one room over an inclusive date range.
///
/// ## Invariants
/// - Only bookings with `is_active == true` occupy their room.
/// - `start_date` and `end_date` are inclusive calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Booking identifier.
    pub id: BookingId,
    /// First night of the stay.
    pub start_date: NaiveDate,
    /// Last night of the stay.
    pub end_date: NaiveDate,
    /// Whether the booking currently holds its room.
    pub is_active: bool,
    /// Customer owning the booking.
    pub customer_id: CustomerId,
    /// Room held by the booking.
    pub room_id: RoomId,
}

impl Booking {
    /// Dates held by this booking.
    #[must_use]
    pub const fn stay(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// True when this booking is active and holds its room on `date`.
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.is_active && self.stay().contains(date)
    }

    /// True when this booking is active, holds `room` and overlaps `stay`.
    #[must_use]
    pub fn conflicts_with(&self, room: RoomId, stay: &DateRange) -> bool {
        self.is_active && self.room_id == room && self.stay().overlaps(stay)
    }
}

impl Entity for Booking {
    type Id = BookingId;

    fn id(&self) -> BookingId {
        self.id
    }
}
