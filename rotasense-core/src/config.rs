//! Estimator configuration
//!
//! Everything the estimator needs to turn a pulse count into a rate:
//! window length, disc resolution, debounce period and, optionally, the
//! wheel the encoder is mounted on.
//!
//! ```rust
//! use fugit::MillisDurationU32;
//! use rotasense_core::EstimatorConfig;
//!
//! let config = EstimatorConfig::new(MillisDurationU32::millis(100), 20)
//!     .with_refractory_period(MillisDurationU32::millis(2))
//!     .with_wheel_diameter(0.065);
//! assert!(config.validate().is_ok());
//! ```

use core::f32::consts::PI;

use fugit::MillisDurationU32;

use crate::constants::{
    encoder::{
        DEFAULT_REFRACTORY_MS, SERIAL_MONITOR_PULSES_PER_REV, SPEED_SENSOR_PULSES_PER_REV,
    },
    motion::SPEED_SENSOR_WHEEL_DIAMETER_M,
    time::{MS_PER_MINUTE, SERIAL_MONITOR_WINDOW_MS, SPEED_SENSOR_WINDOW_MS},
};
use crate::errors::{ConfigError, ConfigResult};

/// Circumference of a wheel from its diameter
#[inline]
pub fn wheel_circumference_from_diameter(diameter_m: f32) -> f32 {
    diameter_m * PI
}

/// Estimator configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    /// How often the pulse counter is drained into a rate sample
    pub sampling_window: MillisDurationU32,

    /// Encoder disc resolution (edges per mechanical revolution)
    pub pulses_per_revolution: u32,

    /// Minimum gap to the previous accepted edge, `None` accepts every edge
    pub refractory_period: Option<MillisDurationU32>,

    /// Wheel circumference in metres, enables linear speed
    pub wheel_circumference_m: Option<f32>,
}

impl EstimatorConfig {
    /// Configuration without debounce or wheel
    pub const fn new(sampling_window: MillisDurationU32, pulses_per_revolution: u32) -> Self {
        Self {
            sampling_window,
            pulses_per_revolution,
            refractory_period: None,
            wheel_circumference_m: None,
        }
    }

    /// Bench encoder printing to a serial monitor
    ///
    /// 20 Hz window, 64-slot disc, every edge counted.
    pub const fn serial_monitor() -> Self {
        Self::new(
            MillisDurationU32::millis(SERIAL_MONITOR_WINDOW_MS),
            SERIAL_MONITOR_PULSES_PER_REV,
        )
    }

    /// Wheel speed sensor polled over I2C
    ///
    /// 16 ms window, 128-slot disc, 3 ms debounce, 0.33 m wheel.
    pub fn i2c_speed_sensor() -> Self {
        Self::new(
            MillisDurationU32::millis(SPEED_SENSOR_WINDOW_MS),
            SPEED_SENSOR_PULSES_PER_REV,
        )
        .with_refractory_period(MillisDurationU32::millis(DEFAULT_REFRACTORY_MS))
        .with_wheel_diameter(SPEED_SENSOR_WHEEL_DIAMETER_M)
    }

    /// Enable the debounce filter
    pub const fn with_refractory_period(mut self, period: MillisDurationU32) -> Self {
        self.refractory_period = Some(period);
        self
    }

    /// Count every edge
    pub const fn without_debounce(mut self) -> Self {
        self.refractory_period = None;
        self
    }

    /// Enable linear speed for a wheel of the given circumference
    pub fn with_wheel_circumference(mut self, circumference_m: f32) -> Self {
        self.wheel_circumference_m = Some(circumference_m);
        self
    }

    /// Enable linear speed for a wheel of the given diameter
    pub fn with_wheel_diameter(self, diameter_m: f32) -> Self {
        self.with_wheel_circumference(wheel_circumference_from_diameter(diameter_m))
    }

    /// Sampling window in milliseconds
    pub const fn window_ms(&self) -> u32 {
        self.sampling_window.to_millis()
    }

    /// Refractory period in milliseconds, `None` when debounce is off
    pub const fn refractory_ms(&self) -> Option<u32> {
        match self.refractory_period {
            Some(period) => Some(period.to_millis()),
            None => None,
        }
    }

    /// Windows per minute, the RPM scale for one revolution per window
    pub fn windows_per_minute(&self) -> f32 {
        MS_PER_MINUTE as f32 / self.window_ms() as f32
    }

    /// Check the construction-time invariants
    pub fn validate(&self) -> ConfigResult<()> {
        if self.window_ms() == 0 {
            return Err(ConfigError::ZeroSamplingWindow);
        }

        if self.pulses_per_revolution == 0 {
            return Err(ConfigError::ZeroPulsesPerRevolution);
        }

        if let Some(value) = self.wheel_circumference_m {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidWheelCircumference { value });
            }
        }

        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::i2c_speed_sensor()
    }
}
