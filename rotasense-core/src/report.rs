//! Per-window rate report

use crate::constants::motion::KPH_PER_MPS;
use crate::time::Timestamp;

/// Result of draining one sampling window
///
/// Speeds are in metres per second and only present when the estimator was
/// configured with a wheel circumference.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RateReport {
    /// Time the window was drained
    pub timestamp: Timestamp,

    /// Accepted edges in this window
    pub raw_pulse_count: u32,

    /// RPM over this window alone
    pub instantaneous_rpm: f32,

    /// Moving average of the per-window RPM
    pub average_rpm: f32,

    /// Linear speed over this window (m/s)
    pub instantaneous_speed: Option<f32>,

    /// Linear speed from the averaged RPM (m/s)
    pub average_speed: Option<f32>,

    /// Accepted edges since the estimator was created
    pub total_pulses: u64,

    /// Revolutions since the estimator was created
    pub total_rotations: f32,
}

impl RateReport {
    /// Instantaneous linear speed in km/h
    pub fn speed_kph(&self) -> Option<f32> {
        self.instantaneous_speed.map(|mps| mps * KPH_PER_MPS)
    }

    /// Averaged linear speed in km/h
    pub fn average_speed_kph(&self) -> Option<f32> {
        self.average_speed.map(|mps| mps * KPH_PER_MPS)
    }

    /// Revolutions per second over this window
    pub fn instantaneous_rps(&self) -> f32 {
        self.instantaneous_rpm / 60.0
    }
}
