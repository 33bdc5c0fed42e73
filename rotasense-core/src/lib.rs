//! Pulse counting and RPM estimation for optical rotary encoders
//!
//! Counts debounced encoder edges from an interrupt, drains them once per
//! sampling window and reports instantaneous and smoothed RPM, optionally
//! converted to wheel speed.
//!
//! Key constraints:
//! - Edge handler runs inside an interrupt: bounded time, no allocation
//! - Counter read-and-reset is atomic with respect to the edge handler
//! - No heap allocation anywhere
//!
//! ```no_run
//! use rotasense_core::{EstimatorConfig, PulseRateEstimator, SampleScheduler};
//! use rotasense_core::time::MonotonicTime;
//!
//! fn millis() -> u64 { 0 }
//!
//! let mut estimator = PulseRateEstimator::<7>::new(EstimatorConfig::i2c_speed_sensor())?;
//! let (edges, mut sampler) = estimator.split();
//! // register `edges` with the GPIO rising-edge interrupt:
//! //     move || { edges.on_edge(millis()); }
//!
//! let mut scheduler = SampleScheduler::new(MonotonicTime::new(millis));
//! loop {
//!     if let Ok(report) = scheduler.poll(&mut sampler) {
//!         // hand `report` to a reporter
//!     }
//! }
//! # Ok::<(), rotasense_core::ConfigError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod buffer;
pub mod config;
pub mod constants;
pub mod counter;
pub mod errors;
pub mod estimator;
pub mod report;
pub mod scheduler;
pub mod time;

// Public API
pub use buffer::MovingAverage;
pub use config::{wheel_circumference_from_diameter, EstimatorConfig};
pub use counter::{DebounceGuard, PulseCounter};
pub use errors::{ConfigError, ConfigResult};
pub use estimator::{EdgeInput, PulseRateEstimator, Sampler};
pub use report::RateReport;
pub use scheduler::SampleScheduler;
pub use time::{TimeSource, Timestamp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
