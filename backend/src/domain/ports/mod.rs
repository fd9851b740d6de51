//! Domain ports for the hexagonal boundary.
//!
//! Driven ports ([`RoomReader`], [`BookingReadWriter`], [`Repository`]) are
//! implemented by outbound adapters. The driving port [`BookingManager`] is
//! implemented by the allocation engine and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod booking_manager;
mod booking_read_writer;
mod repository;
mod room_reader;

#[cfg(test)]
pub use booking_manager::MockBookingManager;
pub use booking_manager::BookingManager;
#[cfg(test)]
pub use booking_read_writer::MockBookingReadWriter;
pub use booking_read_writer::{BookingReadWriter, BookingSourceError, FixtureBookingReadWriter};
pub use repository::Repository;
#[cfg(test)]
pub use room_reader::MockRoomReader;
pub use room_reader::{FixtureRoomReader, RoomReader, RoomSourceError};
