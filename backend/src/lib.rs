//! Hotel room allocation.
//!
//! The [`domain`] module holds the allocation engine and the ports it
//! depends on; [`outbound`] provides in-memory adapters; [`report`] and
//! [`config`] back the `occupancy-report` binary.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod report;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
