//! Wire codec for the generic health sensor peripheral.
//!
//! Fixed-layout little-endian records (observation, feature, schedule),
//! the elapsed-time block, and observation segmentation. Everything here is
//! a pure transform; stateful validation lives in the service crate.

pub mod error;
pub mod feature;
pub mod observation;
pub mod parser;
pub mod schedule;
pub mod segment;
pub mod time;
