//! Error Types for Estimator Configuration
//!
//! ## Design Philosophy
//!
//! The estimator itself has no runtime failure path: counting an edge and
//! draining a window are infallible. The only classifiable condition is a
//! malformed configuration, and fixing one means reflashing firmware, so it is
//! rejected once at construction and never seen again.
//!
//! Errors follow the usual embedded constraints:
//!
//! 1. **No Heap Allocation**: variants carry plain numbers only.
//! 2. **Copy Semantics**: errors are cheap to return and store.
//!
//! ## Error Categories
//!
//! - `ZeroSamplingWindow`: the RPM formula divides by the window length
//! - `ZeroPulsesPerRevolution`: the RPM formula divides by the disc resolution
//! - `ZeroAverageWindow`: a moving average over nothing is meaningless
//! - `InvalidWheelCircumference`: linear speed would be NaN, infinite or negative
//!
//! ```rust
//! use rotasense_core::{ConfigError, EstimatorConfig, PulseRateEstimator};
//! use fugit::MillisDurationU32;
//!
//! let config = EstimatorConfig::new(MillisDurationU32::millis(0), 128);
//! match PulseRateEstimator::<7>::new(config) {
//!     Err(ConfigError::ZeroSamplingWindow) => {}
//!     _ => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors, raised at construction only
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Sampling window must be at least one millisecond
    #[error("Sampling window must be greater than 0 ms")]
    ZeroSamplingWindow,

    /// Encoder resolution must be at least one pulse per revolution
    #[error("Pulses per revolution must be greater than 0")]
    ZeroPulsesPerRevolution,

    /// Moving average needs at least one slot
    #[error("Moving average window must hold at least one sample")]
    ZeroAverageWindow,

    /// Wheel circumference must be a finite, positive length in metres
    #[error("Invalid wheel circumference: {value} m")]
    InvalidWheelCircumference {
        /// The rejected circumference
        value: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroSamplingWindow =>
                defmt::write!(fmt, "Sampling window is 0 ms"),
            Self::ZeroPulsesPerRevolution =>
                defmt::write!(fmt, "Pulses per revolution is 0"),
            Self::ZeroAverageWindow =>
                defmt::write!(fmt, "Average window is empty"),
            Self::InvalidWheelCircumference { value } =>
                defmt::write!(fmt, "Invalid wheel circumference {} m", value),
        }
    }
}
