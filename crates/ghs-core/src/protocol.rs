//! GATT identifiers of the deployed generic health service.
//!
//! The host shim registers these; the core never parses UUIDs itself.

pub const GHS_SERVICE_UUID: &str = "00007f44-0000-1000-8000-00805f9b34fb";
pub const OBSERVATION_CHAR_UUID: &str = "00007f43-0000-1000-8000-00805f9b34fb";
pub const GHS_FEATURES_CHAR_UUID: &str = "00007f41-0000-1000-8000-00805f9b34fb";
pub const GHS_SCHEDULE_CHANGED_CHAR_UUID: &str = "00007f3f-0000-1000-8000-00805f9b34fb";
pub const GHS_SCHEDULE_DESCRIPTOR_UUID: &str = "00007f35-0000-1000-8000-00805f9b34fb";

/// Bytes reserved per notification packet for link-layer framing; the
/// usable segment payload is the negotiated unit minus this.
pub const PACKET_HEADER_RESERVE: usize = 4;
