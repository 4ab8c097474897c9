//! Schedule-configuration state machine.

use ghs_codec::schedule::{ScheduleRecord, SCHEDULE_RECORD_LEN};
use thiserror::Error;

use crate::config::ServiceConfig;

/// Rejection surfaced to the host for an out-of-policy schedule write.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("value out of range: {0}")]
    OutOfRange(&'static str),
}

/// Default measurement period encoded at construction, seconds.
pub const DEFAULT_PERIOD_SECS: f32 = 1.0;
/// Default update interval encoded at construction, seconds.
pub const DEFAULT_INTERVAL_SECS: f32 = 1.0;

/// Whether a collector has configured the schedule yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulePhase {
    Idle,
    Configured,
}

/// Last accepted schedule configuration.
///
/// The raw wire bytes are retained verbatim so descriptor reads return
/// exactly what was written; a rejected write never mutates anything.
#[derive(Debug, Clone)]
pub struct ScheduleState {
    raw: Vec<u8>,
    record: ScheduleRecord,
    phase: SchedulePhase,
}

impl ScheduleState {
    pub fn new(config: &ServiceConfig) -> Self {
        let record = ScheduleRecord {
            measurement: config.supported_measurement,
            period_secs: DEFAULT_PERIOD_SECS,
            interval_secs: DEFAULT_INTERVAL_SECS,
        };
        Self {
            raw: record.encode(),
            record,
            phase: SchedulePhase::Idle,
        }
    }

    pub fn phase(&self) -> SchedulePhase {
        self.phase
    }

    /// Raw bytes of the last stored record, for descriptor read-back.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn record(&self) -> ScheduleRecord {
        self.record
    }

    /// Live update interval used by the notification cycle.
    pub fn interval_secs(&self) -> f32 {
        self.record.interval_secs
    }

    /// Validates and applies one incoming write. First failure wins, in
    /// order: length, measurement code, period bounds, interval bounds.
    pub fn apply_write(
        &mut self,
        value: &[u8],
        config: &ServiceConfig,
    ) -> Result<(), ValidationError> {
        if value.len() != SCHEDULE_RECORD_LEN {
            return Err(ValidationError::OutOfRange("schedule write must be 12 bytes"));
        }
        let record = ScheduleRecord::decode(value)
            .map_err(|_| ValidationError::OutOfRange("malformed schedule record"))?;

        if record.measurement != config.supported_measurement {
            return Err(ValidationError::OutOfRange("unsupported measurement code"));
        }
        if !(config.min_period_secs..=config.max_period_secs).contains(&record.period_secs) {
            return Err(ValidationError::OutOfRange("measurement period outside policy"));
        }
        if !(record.period_secs..=config.max_interval_secs).contains(&record.interval_secs) {
            return Err(ValidationError::OutOfRange("update interval outside policy"));
        }

        self.raw = value.to_vec();
        self.record = record;
        self.phase = SchedulePhase::Configured;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ghs_codec::schedule::ScheduleRecord;
    use ghs_core::MdcCode;

    use super::{SchedulePhase, ScheduleState, ValidationError};
    use crate::config::ServiceConfig;

    fn write_bytes(measurement: u32, period: f32, interval: f32) -> Vec<u8> {
        ScheduleRecord {
            measurement: MdcCode(measurement),
            period_secs: period,
            interval_secs: interval,
        }
        .encode()
    }

    #[test]
    fn starts_idle_with_encoded_defaults() {
        let state = ScheduleState::new(&ServiceConfig::default());
        assert_eq!(state.phase(), SchedulePhase::Idle);
        assert_eq!(state.raw().len(), 12);
        assert_eq!(state.interval_secs(), 1.0);
    }

    #[test]
    fn valid_write_is_stored_verbatim_and_configures() {
        let cfg = ServiceConfig::default();
        let mut state = ScheduleState::new(&cfg);
        let value = write_bytes(150_456, 2.0, 4.5);

        state.apply_write(&value, &cfg).expect("write should be accepted");
        assert_eq!(state.phase(), SchedulePhase::Configured);
        assert_eq!(state.raw(), value.as_slice());
        assert_eq!(state.interval_secs(), 4.5);

        // re-configuring is idempotent on the phase
        let value2 = write_bytes(150_456, 1.0, 1.0);
        state.apply_write(&value2, &cfg).expect("write should be accepted");
        assert_eq!(state.phase(), SchedulePhase::Configured);
        assert_eq!(state.raw(), value2.as_slice());
    }

    #[test]
    fn wrong_length_is_rejected_without_mutation() {
        let cfg = ServiceConfig::default();
        let mut state = ScheduleState::new(&cfg);
        let before = state.raw().to_vec();

        let err = state
            .apply_write(&[0u8; 11], &cfg)
            .expect_err("short write should be rejected");
        assert!(matches!(err, ValidationError::OutOfRange(_)));
        assert_eq!(state.raw(), before.as_slice());
        assert_eq!(state.phase(), SchedulePhase::Idle);
    }

    #[test]
    fn wrong_measurement_code_is_rejected() {
        let cfg = ServiceConfig::default();
        let mut state = ScheduleState::new(&cfg);
        let err = state
            .apply_write(&write_bytes(150_457, 2.0, 4.0), &cfg)
            .expect_err("unsupported code should be rejected");
        assert_eq!(
            err,
            ValidationError::OutOfRange("unsupported measurement code")
        );
    }

    #[test]
    fn period_bounds_are_enforced() {
        let cfg = ServiceConfig::default();
        let mut state = ScheduleState::new(&cfg);
        for period in [0.9_f32, 5.1] {
            let before = state.raw().to_vec();
            assert!(state
                .apply_write(&write_bytes(150_456, period, 6.0), &cfg)
                .is_err());
            assert_eq!(state.raw(), before.as_slice());
        }
        assert!(state.apply_write(&write_bytes(150_456, 1.0, 6.0), &cfg).is_ok());
        assert!(state.apply_write(&write_bytes(150_456, 5.0, 6.0), &cfg).is_ok());
    }

    #[test]
    fn interval_bounds_are_enforced() {
        let cfg = ServiceConfig::default();
        let mut state = ScheduleState::new(&cfg);
        // interval below the period
        assert!(state
            .apply_write(&write_bytes(150_456, 3.0, 2.9), &cfg)
            .is_err());
        // interval above the ceiling
        assert!(state
            .apply_write(&write_bytes(150_456, 3.0, 10.1), &cfg)
            .is_err());
        assert_eq!(state.phase(), SchedulePhase::Idle);
        // boundaries are inclusive
        assert!(state.apply_write(&write_bytes(150_456, 3.0, 3.0), &cfg).is_ok());
        assert!(state.apply_write(&write_bytes(150_456, 3.0, 10.0), &cfg).is_ok());
    }
}
