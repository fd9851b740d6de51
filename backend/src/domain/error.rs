//! Domain-level error types for room allocation.
//!
//! These errors are transport agnostic. Adapters map them onto whatever
//! envelope their protocol uses via [`AllocationError::code`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ports::{BookingSourceError, RoomSourceError};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested dates failed validation.
    InvalidArgument,
    /// The room source could not produce the inventory.
    RoomSourceUnavailable,
    /// The booking source failed to read or persist bookings.
    BookingSourceUnavailable,
}

/// Failures surfaced by the allocation engine.
///
/// `InvalidArgument` is the only kind the engine originates. Source failures
/// are carried through unchanged.
///
/// # Examples
/// ```
/// use hotel_booking::domain::{AllocationError, ErrorCode};
///
/// let err = AllocationError::invalid_argument("start date must be after today");
/// assert_eq!(err.code(), ErrorCode::InvalidArgument);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Requested dates are out of order or not in the future.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Human-readable reason.
        message: String,
    },
    /// The room source failed.
    #[error(transparent)]
    RoomSource(#[from] RoomSourceError),
    /// The booking source failed.
    #[error(transparent)]
    BookingSource(#[from] BookingSourceError),
}

impl AllocationError {
    /// Convenience constructor for [`AllocationError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            Self::RoomSource(_) => ErrorCode::RoomSourceUnavailable,
            Self::BookingSource(_) => ErrorCode::BookingSourceUnavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error codes and messages.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn invalid_argument_prefixes_message() {
        let err = AllocationError::invalid_argument("end date precedes start date");
        assert_eq!(
            err.to_string(),
            "invalid argument: end date precedes start date"
        );
    }

    #[rstest]
    fn source_errors_keep_their_own_message() {
        let source = RoomSourceError::connection("socket closed");
        let err = AllocationError::from(source.clone());
        assert_eq!(err.to_string(), source.to_string());
        assert_eq!(err.code(), ErrorCode::RoomSourceUnavailable);
    }

    #[rstest]
    fn booking_source_errors_map_to_booking_code() {
        let err = AllocationError::from(BookingSourceError::query("timeout"));
        assert_eq!(err.code(), ErrorCode::BookingSourceUnavailable);
        assert!(matches!(err, AllocationError::BookingSource(_)));
    }

    #[rstest]
    fn error_codes_serialize_as_snake_case() {
        let json = serde_json::to_string(&ErrorCode::RoomSourceUnavailable)
            .expect("serialize error code");
        assert_eq!(json, "\"room_source_unavailable\"");
    }
}
