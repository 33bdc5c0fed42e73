//! Pulse Rate Estimator
//!
//! ## Overview
//!
//! Turns debounced encoder edges into RPM, once per sampling window:
//!
//! ```text
//! rpm         = (60000 / window_ms) * (pulses / pulses_per_revolution)
//! average_rpm = mean of the last N rpm samples
//! speed       = (rpm / 60) * wheel_circumference        (optional)
//! ```
//!
//! The conversion runs in `f32` so windows that do not divide a minute
//! evenly (16 ms, 7 ms, ...) carry no truncation bias. The configured window
//! is used, not the measured gap between calls.
//!
//! ## Contexts
//!
//! The estimator owns all state. Two handles borrow it:
//!
//! - [`EdgeInput`]: shared and `Copy`, registered with the edge interrupt
//! - [`Sampler`]: exclusive, called from the main loop every window
//!
//! ```rust
//! use rotasense_core::{EstimatorConfig, PulseRateEstimator};
//! use fugit::MillisDurationU32;
//!
//! let config = EstimatorConfig::new(MillisDurationU32::millis(1000), 128);
//! let mut estimator = PulseRateEstimator::<7>::new(config)?;
//!
//! let (edges, mut sampler) = estimator.split();
//! for t in 0..64 {
//!     edges.on_edge(t * 10);
//! }
//! let report = sampler.sample_window(1000);
//! assert_eq!(report.raw_pulse_count, 64);
//! assert_eq!(report.instantaneous_rpm, 30.0);
//! # Ok::<(), rotasense_core::ConfigError>(())
//! ```
//!
//! On firmware the estimator is usually placed in a `static` cell so both
//! handles are `'static`: the `EdgeInput` moves into the GPIO interrupt and
//! the `Sampler` stays in the main loop.

use crate::buffer::MovingAverage;
use crate::config::EstimatorConfig;
use crate::constants::buffers::DEFAULT_AVERAGE_WINDOW;
use crate::counter::PulseCounter;
use crate::errors::{ConfigError, ConfigResult};
use crate::report::RateReport;
use crate::time::Timestamp;

/// Main-loop side state: conversion factors, smoothing and totals
struct RateTracker<const N: usize> {
    config: EstimatorConfig,
    windows_per_minute: f32,
    rpm_average: MovingAverage<N>,
    total_pulses: u64,
}

impl<const N: usize> RateTracker<N> {
    fn new(config: EstimatorConfig) -> Self {
        Self {
            config,
            windows_per_minute: config.windows_per_minute(),
            rpm_average: MovingAverage::new(),
            total_pulses: 0,
        }
    }

    fn record(&mut self, pulses: u32, now: Timestamp) -> RateReport {
        let ppr = self.config.pulses_per_revolution as f32;

        self.total_pulses = self.total_pulses.saturating_add(pulses as u64);

        let instantaneous_rpm = self.windows_per_minute * (pulses as f32 / ppr);
        let average_rpm = self.rpm_average.push(instantaneous_rpm);

        let (instantaneous_speed, average_speed) = match self.config.wheel_circumference_m {
            Some(circumference) => (
                Some(instantaneous_rpm / 60.0 * circumference),
                Some(average_rpm / 60.0 * circumference),
            ),
            None => (None, None),
        };

        log_debug!("window at {} ms: {} pulses, {} rpm", now, pulses, instantaneous_rpm);

        RateReport {
            timestamp: now,
            raw_pulse_count: pulses,
            instantaneous_rpm,
            average_rpm,
            instantaneous_speed,
            average_speed,
            total_pulses: self.total_pulses,
            total_rotations: self.total_pulses as f32 / ppr,
        }
    }
}

/// Converts encoder edges into instantaneous and smoothed RPM
///
/// `N` is the moving-average window in samples.
pub struct PulseRateEstimator<const N: usize = DEFAULT_AVERAGE_WINDOW> {
    counter: PulseCounter,
    tracker: RateTracker<N>,
}

impl<const N: usize> PulseRateEstimator<N> {
    /// Build an estimator, rejecting configurations that would divide by zero
    pub fn new(config: EstimatorConfig) -> ConfigResult<Self> {
        if N == 0 {
            log_warn!("rejecting estimator with empty average window");
            return Err(ConfigError::ZeroAverageWindow);
        }
        config.validate()?;

        log_info!(
            "estimator: {} ms window, {} ppr, average over {} windows",
            config.window_ms(),
            config.pulses_per_revolution,
            N
        );

        Ok(Self {
            counter: PulseCounter::new(config.refractory_ms()),
            tracker: RateTracker::new(config),
        })
    }

    /// Register a rising edge, returns whether it passed the debounce filter
    #[inline]
    pub fn on_edge(&self, timestamp: Timestamp) -> bool {
        self.counter.on_edge(timestamp)
    }

    /// Drain the counter and compute the rates for the window ending at `now`
    pub fn sample_window(&mut self, now: Timestamp) -> RateReport {
        let pulses = self.counter.drain();
        self.tracker.record(pulses, now)
    }

    /// Split into the interrupt-side and main-loop-side handles
    pub fn split(&mut self) -> (EdgeInput<'_>, Sampler<'_, N>) {
        let counter = &self.counter;
        (
            EdgeInput { counter },
            Sampler {
                counter,
                tracker: &mut self.tracker,
            },
        )
    }

    /// Pulses accepted since the last window
    pub fn pending_pulses(&self) -> u32 {
        self.counter.pending()
    }

    /// Current smoothed RPM
    pub fn average_rpm(&self) -> f32 {
        self.tracker.rpm_average.average()
    }

    /// Accepted edges drained so far
    pub fn total_pulses(&self) -> u64 {
        self.tracker.total_pulses
    }

    /// Active configuration
    pub fn config(&self) -> &EstimatorConfig {
        &self.tracker.config
    }
}

/// Interrupt-side handle
#[derive(Clone, Copy)]
pub struct EdgeInput<'a> {
    counter: &'a PulseCounter,
}

impl EdgeInput<'_> {
    /// Register a rising edge, returns whether it passed the debounce filter
    #[inline]
    pub fn on_edge(&self, timestamp: Timestamp) -> bool {
        self.counter.on_edge(timestamp)
    }
}

/// Main-loop-side handle
pub struct Sampler<'a, const N: usize> {
    counter: &'a PulseCounter,
    tracker: &'a mut RateTracker<N>,
}

impl<const N: usize> Sampler<'_, N> {
    /// Drain the counter and compute the rates for the window ending at `now`
    pub fn sample_window(&mut self, now: Timestamp) -> RateReport {
        let pulses = self.counter.drain();
        self.tracker.record(pulses, now)
    }

    /// Configured sampling window in milliseconds
    pub fn window_ms(&self) -> u32 {
        self.tracker.config.window_ms()
    }

    /// Current smoothed RPM
    pub fn average_rpm(&self) -> f32 {
        self.tracker.rpm_average.average()
    }

    /// Accepted edges drained so far
    pub fn total_pulses(&self) -> u64 {
        self.tracker.total_pulses
    }
}
