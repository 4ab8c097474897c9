//! Relative elapsed-time block carried inside every observation.

use crate::error::EncodeError;
use crate::parser::ByteWriter;

/// 2000-01-01T00:00:00Z expressed in Unix seconds.
pub const ELAPSED_TIME_EPOCH_UNIX_SECS: u64 = 946_684_800;
/// Flags: UTC clock, no timezone offset, relative time present.
pub const ELAPSED_TIME_FLAGS: u8 = 0x22;
/// Network time source: cellular.
pub const NETWORK_TYPE_CELLULAR: u8 = 0x06;
/// Encoded block length: flags, 6-byte offset, network type, tz/DST byte.
pub const ELAPSED_TIME_LEN: usize = 9;

/// Seconds elapsed since the fixed reference epoch.
///
/// Built fresh from an injected clock on every observation; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTime {
    relative_secs: u64,
}

impl ElapsedTime {
    /// Derives the relative offset from a Unix-seconds clock reading.
    ///
    /// Clocks before the epoch are rejected rather than wrapped.
    pub fn from_unix(now_unix_secs: u64) -> Result<Self, EncodeError> {
        if now_unix_secs < ELAPSED_TIME_EPOCH_UNIX_SECS {
            return Err(EncodeError::TimeBeforeEpoch);
        }
        Ok(Self {
            relative_secs: now_unix_secs - ELAPSED_TIME_EPOCH_UNIX_SECS,
        })
    }

    pub fn relative_secs(&self) -> u64 {
        self.relative_secs
    }

    /// Appends the 9-byte block: flags, offset (6 bytes LE), network type,
    /// timezone/DST offset.
    pub fn encode_onto(&self, w: &mut ByteWriter) {
        w.put_u8(ELAPSED_TIME_FLAGS);
        w.put_bytes(&self.relative_secs.to_le_bytes()[..6]);
        w.put_u8(NETWORK_TYPE_CELLULAR);
        w.put_u8(0x00);
    }
}
