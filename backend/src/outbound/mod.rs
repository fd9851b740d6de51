//! Outbound adapters implementing the domain's driven ports.
//!
//! - **memory**: in-memory room inventory and booking store
//! - **snapshot**: JSON snapshot loading used to seed the in-memory adapters
//!
//! Adapters translate storage concerns into port errors. They contain no
//! allocation logic.

pub mod memory;
pub mod snapshot;
