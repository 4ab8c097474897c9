//! GATT host abstraction for the health sensor core.
//!
//! The service only depends on the byte-oriented host contract defined in
//! this crate; connection management, descriptor registration, and link
//! delivery live behind it.

pub mod host;

pub use host::{GattHost, InMemoryHost};
