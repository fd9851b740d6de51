//! Driven port for reading and recording bookings.

use crate::domain::{Booking, BookingId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by booking store adapters.
    pub enum BookingSourceError {
        /// Repository connection could not be established.
        Connection { message: String } => "booking source connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "booking source query failed: {message}",
        /// A booking with the same identifier already exists.
        Conflict { id: BookingId } => "booking {id} already exists",
        /// No booking exists with the given identifier.
        NotFound { id: BookingId } => "booking {id} not found",
    }
}

/// Port exposing the booking snapshot and the single write the engine needs.
#[cfg_attr(test, mockall::automock)]
pub trait BookingReadWriter: Send + Sync {
    /// Return every booking, active or not.
    fn all_bookings(&self) -> Result<Vec<Booking>, BookingSourceError>;

    /// Persist a confirmed booking.
    fn add(&self, booking: &Booking) -> Result<(), BookingSourceError>;
}

/// Fixture booking store holding no bookings and discarding writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureBookingReadWriter;

impl BookingReadWriter for FixtureBookingReadWriter {
    fn all_bookings(&self) -> Result<Vec<Booking>, BookingSourceError> {
        Ok(Vec::new())
    }

    fn add(&self, _booking: &Booking) -> Result<(), BookingSourceError> {
        Ok(())
    }
}
