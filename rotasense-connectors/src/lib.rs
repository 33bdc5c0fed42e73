//! Report Sinks for Encoder Rate Reports
//!
//! ## Overview
//!
//! The estimator produces one [`RateReport`] per sampling window. This crate
//! holds the two ways the rig consumes them:
//!
//! ### Serial text line
//!
//! **When to use:** bench work with a serial monitor attached. One line per
//! window, pushed as soon as it is computed. See [`serial`].
//!
//! ### I2C slave register
//!
//! **When to use:** a bus master (a Raspberry Pi, a flight controller) polls
//! for speed at its own pace. The last speed is held until the next window
//! overwrites it, so production and consumption are decoupled. See [`i2c`].
//!
//! ## Example Usage
//!
//! ```rust
//! use rotasense_connectors::{Reporter, serial::SerialLineReporter};
//! use rotasense_core::{EstimatorConfig, PulseRateEstimator};
//!
//! let mut estimator = PulseRateEstimator::<7>::new(EstimatorConfig::i2c_speed_sensor()).unwrap();
//! let report = estimator.sample_window(16);
//!
//! let mut line = String::new();
//! SerialLineReporter::new(&mut line).report(&report).unwrap();
//! assert!(line.starts_with("RPM: 0.00 |"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

pub mod i2c;
pub mod serial;

pub use i2c::SpeedRegister;
pub use serial::{LineLayout, SerialLineReporter};

use rotasense_core::RateReport;
use thiserror_no_std::Error;

/// Common reporter errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// The underlying writer refused the text
    #[error("Formatting failed")]
    Format,

    /// The payload does not fit its fixed-size buffer
    #[error("Payload exceeds {capacity} bytes")]
    PayloadOverflow {
        /// Buffer capacity in bytes
        capacity: usize,
    },
}

impl From<core::fmt::Error> for ReportError {
    fn from(_: core::fmt::Error) -> Self {
        ReportError::Format
    }
}

/// Trait for all report sinks
pub trait Reporter {
    /// Error type returned by the sink
    type Error;

    /// Consume one window's report
    fn report(&mut self, report: &RateReport) -> Result<(), Self::Error>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    type Error = R::Error;

    fn report(&mut self, report: &RateReport) -> Result<(), Self::Error> {
        (**self).report(report)
    }
}
