//! Shared primitives for the generic health sensor peripheral.
//!
//! Codec, transport, and service crates only depend on the identifier
//! newtypes and protocol constants defined here.

pub mod protocol;
pub mod types;

pub use types::{Channel, Characteristic, Descriptor, MdcCode, UnitCode};
