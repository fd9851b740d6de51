//! Domain primitives and the allocation service.
//!
//! Purpose: define the room and booking entities, the inclusive date
//! arithmetic the allocation rules rely on, and the engine that applies them.
//! Nothing in this module performs IO; sources are reached through
//! [`ports`].
//!
//! Public surface:
//! - `AllocationEngine`: first-fit allocation and occupancy reporting.
//! - `Room`, `Booking`: entities read from the driven ports.
//! - `StayRequest`, `BookingOutcome`: request in, tagged result out.
//! - `AllocationError`, `ErrorCode`: the engine's error model.

pub mod allocation;
pub mod booking;
pub mod date_range;
pub mod entity;
pub mod error;
pub mod ports;
pub mod room;
pub mod stay;

pub use self::allocation::AllocationEngine;
pub use self::booking::{Booking, BookingId, CustomerId};
pub use self::date_range::DateRange;
pub use self::entity::Entity;
pub use self::error::{AllocationError, ErrorCode};
pub use self::room::{Room, RoomId};
pub use self::stay::{BookingOutcome, StayRequest};
