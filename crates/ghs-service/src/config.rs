use ghs_core::types::{MDC_DIM_PER_CENT, MDC_PULS_OXIM_SAT_O2};
use ghs_core::{MdcCode, UnitCode};
use serde::{Deserialize, Serialize};

/// Per-instance service tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// The one measurement code this service reports and accepts.
    pub supported_measurement: MdcCode,
    /// Unit code reported with every observation.
    pub unit: UnitCode,
    /// Reading reported until a real sensor feed is wired in.
    pub placeholder_value: f32,
    /// Measurement duration carried in each observation, seconds.
    pub measurement_duration_secs: f32,
    /// Lowest acceptable measurement period, seconds.
    pub min_period_secs: f32,
    /// Highest acceptable measurement period, seconds.
    pub max_period_secs: f32,
    /// Highest acceptable update interval, seconds.
    pub max_interval_secs: f32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            supported_measurement: MDC_PULS_OXIM_SAT_O2,
            unit: MDC_DIM_PER_CENT,
            placeholder_value: 96.1,
            measurement_duration_secs: 1.0,
            min_period_secs: 1.0,
            max_period_secs: 5.0,
            max_interval_secs: 10.0,
        }
    }
}
