//! Window scheduling for polling main loops
//!
//! The estimator trusts its caller to drain it once per window. This module
//! is that caller for cooperative loops that poll instead of waiting on a
//! timer interrupt:
//!
//! ```rust
//! use rotasense_core::{EstimatorConfig, PulseRateEstimator, SampleScheduler};
//! use rotasense_core::time::MockTimeSource;
//!
//! let clock = MockTimeSource::new(0);
//! let mut estimator = PulseRateEstimator::<7>::new(EstimatorConfig::serial_monitor())?;
//! let (_edges, mut sampler) = estimator.split();
//! let mut scheduler = SampleScheduler::new(&clock);
//!
//! clock.advance(49);
//! assert!(matches!(scheduler.poll(&mut sampler), Err(nb::Error::WouldBlock)));
//!
//! clock.advance(1);
//! let report = nb::block!(scheduler.poll(&mut sampler)).unwrap();
//! assert_eq!(report.timestamp, 50);
//! # Ok::<(), rotasense_core::ConfigError>(())
//! ```

use core::convert::Infallible;

use crate::estimator::Sampler;
use crate::report::RateReport;
use crate::time::{elapsed_ms, TimeSource, Timestamp};

/// Decides when a sampling window has elapsed
///
/// A window is due once `now - last_sample >= window`. The next window is
/// measured from the time the previous one was actually drained, so a late
/// poll delays every later window instead of producing a burst of short ones.
pub struct SampleScheduler<C: TimeSource> {
    clock: C,
    last_sample: Timestamp,
}

impl<C: TimeSource> SampleScheduler<C> {
    /// Start scheduling from the clock's current time
    pub fn new(clock: C) -> Self {
        let last_sample = clock.now();
        Self { clock, last_sample }
    }

    /// Check whether a window of `window_ms` has elapsed at `now`
    pub fn is_due(&self, now: Timestamp, window_ms: u32) -> bool {
        elapsed_ms(self.last_sample, now) >= window_ms as u64
    }

    /// Drain the sampler if its window has elapsed
    ///
    /// Returns `WouldBlock` until then; never fails otherwise.
    pub fn poll<const N: usize>(
        &mut self,
        sampler: &mut Sampler<'_, N>,
    ) -> nb::Result<RateReport, Infallible> {
        let now = self.clock.now();
        if !self.is_due(now, sampler.window_ms()) {
            return Err(nb::Error::WouldBlock);
        }

        self.last_sample = now;
        Ok(sampler.sample_window(now))
    }

    /// Time the last window was drained
    pub fn last_sample(&self) -> Timestamp {
        self.last_sample
    }

    /// Underlying clock
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
