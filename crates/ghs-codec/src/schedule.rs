//! Schedule configuration record: measurement code, period, update interval.

use ghs_core::MdcCode;

use crate::error::DecodeError;
use crate::parser::{ByteReader, ByteWriter};

/// Wire length of a schedule record.
pub const SCHEDULE_RECORD_LEN: usize = 4 + 4 + 4;

/// Decoded schedule configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleRecord {
    pub measurement: MdcCode,
    /// Seconds between measurements.
    pub period_secs: f32,
    /// Seconds between observation notifications.
    pub interval_secs: f32,
}

impl ScheduleRecord {
    pub fn encode(&self) -> Vec<u8> {
        let mut w = ByteWriter::with_capacity(SCHEDULE_RECORD_LEN);
        w.put_u32(self.measurement.0);
        w.put_float(self.period_secs);
        w.put_float(self.interval_secs);
        w.into_bytes()
    }

    /// Reads the 12-byte record from the front of `bytes`.
    ///
    /// Callers enforcing an exact-length policy check `bytes.len()` first.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut r = ByteReader::new(bytes);
        Ok(Self {
            measurement: MdcCode(r.get_u32()?),
            period_secs: r.get_float()?,
            interval_secs: r.get_float()?,
        })
    }
}
