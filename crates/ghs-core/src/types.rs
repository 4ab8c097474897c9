use serde::{Deserialize, Serialize};

/// 32-bit MDC nomenclature code identifying a measurement type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MdcCode(pub u32);

/// 16-bit MDC dimension code identifying a reported unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCode(pub u16);

/// Peripheral oxygen saturation, the one measurement this service reports.
pub const MDC_PULS_OXIM_SAT_O2: MdcCode = MdcCode(150_456);
/// Percentage dimension used for saturation values.
pub const MDC_DIM_PER_CENT: UnitCode = UnitCode(0x0220);

/// Notification channel exposed to remote collectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Broadcasts the schedule record after another collector rewrites it.
    ScheduleChanged,
    /// Carries segmented observation records on the live cadence.
    LiveObservation,
}

/// Readable characteristic exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Characteristic {
    Features,
    ScheduleChanged,
    LiveObservation,
}

/// Descriptor exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Descriptor {
    /// Read/write schedule configuration on the features characteristic.
    Schedule,
}
