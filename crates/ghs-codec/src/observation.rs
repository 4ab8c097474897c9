//! Numeric observation record builder.

use ghs_core::{MdcCode, UnitCode};

use crate::error::EncodeError;
use crate::parser::ByteWriter;
use crate::time::{ElapsedTime, ELAPSED_TIME_LEN};

/// Record type byte for a numeric observation.
pub const OBSERVATION_TYPE_NUMERIC: u8 = 0x00;
/// Presence flags: timestamp, duration, and unit/value all present. This
/// service never emits any other combination.
pub const OBSERVATION_FLAGS: u16 = 0x0007;
/// Byte count following the length field with the fixed flag set.
pub const OBSERVATION_BODY_LEN: usize = 2 + 4 + ELAPSED_TIME_LEN + 4 + 2 + 4;
/// Total encoded record length.
pub const OBSERVATION_RECORD_LEN: usize = 1 + 2 + OBSERVATION_BODY_LEN;

/// One physiological measurement snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub measurement: MdcCode,
    pub unit: UnitCode,
    /// Reading in the reported unit.
    pub value: f32,
    /// Measurement duration in seconds.
    pub duration_secs: f32,
}

impl Observation {
    /// Encodes the full record against the injected clock.
    ///
    /// The length field is derived from the encoded remainder, never
    /// hand-specified.
    pub fn encode(&self, now_unix_secs: u64) -> Result<Vec<u8>, EncodeError> {
        let elapsed = ElapsedTime::from_unix(now_unix_secs)?;

        let mut body = ByteWriter::with_capacity(OBSERVATION_BODY_LEN);
        body.put_u16(OBSERVATION_FLAGS);
        body.put_u32(self.measurement.0);
        elapsed.encode_onto(&mut body);
        body.put_float(self.duration_secs);
        body.put_u16(self.unit.0);
        body.put_float(self.value);
        let body = body.into_bytes();

        let mut record = ByteWriter::with_capacity(OBSERVATION_RECORD_LEN);
        record.put_u8(OBSERVATION_TYPE_NUMERIC);
        record.put_u16(body.len() as u16);
        record.put_bytes(&body);
        Ok(record.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use ghs_core::types::{MDC_DIM_PER_CENT, MDC_PULS_OXIM_SAT_O2};

    use super::{Observation, OBSERVATION_BODY_LEN, OBSERVATION_RECORD_LEN};
    use crate::time::ELAPSED_TIME_EPOCH_UNIX_SECS;

    fn sample() -> Observation {
        Observation {
            measurement: MDC_PULS_OXIM_SAT_O2,
            unit: MDC_DIM_PER_CENT,
            value: 96.1,
            duration_secs: 1.0,
        }
    }

    #[test]
    fn record_has_fixed_length_and_computed_length_field() {
        let bytes = sample()
            .encode(ELAPSED_TIME_EPOCH_UNIX_SECS + 42)
            .expect("encode should succeed");
        assert_eq!(bytes.len(), OBSERVATION_RECORD_LEN);
        assert_eq!(OBSERVATION_BODY_LEN, 25);
        assert_eq!(u16::from_le_bytes([bytes[1], bytes[2]]) as usize, 25);
        assert_eq!(bytes.len() - 3, 25);
    }

    #[test]
    fn record_layout_matches_field_order() {
        let bytes = sample()
            .encode(ELAPSED_TIME_EPOCH_UNIX_SECS)
            .expect("encode should succeed");
        assert_eq!(bytes[0], 0x00); // numeric observation
        assert_eq!(&bytes[3..5], &[0x07, 0x00]); // flags
        assert_eq!(&bytes[5..9], &150_456_u32.to_le_bytes()); // measurement
        assert_eq!(bytes[9], 0x22); // elapsed-time flags
        assert_eq!(&bytes[18..22], &[0x0A, 0x00, 0x00, 0xFF]); // 1.0 s
        assert_eq!(&bytes[22..24], &[0x20, 0x02]); // percent
        assert_eq!(&bytes[24..28], &[0xC1, 0x03, 0x00, 0xFF]); // 96.1
    }

    #[test]
    fn pre_epoch_clock_propagates_encode_error() {
        assert!(sample().encode(0).is_err());
    }
}
