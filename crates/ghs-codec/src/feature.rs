//! Feature record served on characteristic reads.

use ghs_core::MdcCode;

use crate::parser::ByteWriter;

/// Feature flags byte; no optional feature is advertised.
pub const FEATURE_FLAGS: u8 = 0x00;
/// Number of supported observation types.
pub const SUPPORTED_OBSERVATION_TYPES: u8 = 0x01;
/// Encoded feature record length.
pub const FEATURE_RECORD_LEN: usize = 1 + 1 + 4;

/// Encodes `[flags, type count, <measurement code LE>]`.
pub fn encode_features(supported: MdcCode) -> Vec<u8> {
    let mut w = ByteWriter::with_capacity(FEATURE_RECORD_LEN);
    w.put_u8(FEATURE_FLAGS);
    w.put_u8(SUPPORTED_OBSERVATION_TYPES);
    w.put_u32(supported.0);
    w.into_bytes()
}
