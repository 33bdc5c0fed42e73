//! Time management for the sampling loop
//!
//! Provides the clock abstraction the main loop uses to decide when a
//! sampling window has elapsed:
//! - Monotonic hardware counter (milliseconds since boot)
//! - Mock clock (for deterministic tests)
//!
//! Edge timestamps and sample times share the same unit and epoch.

use core::cell::Cell;

/// Timestamp in milliseconds since device boot
pub type Timestamp = u64;

/// Source of time for the sampling loop
///
/// `now()` must never go backwards. Wall-clock sources that can be adjusted
/// (NTP, RTC writes) are not suitable for rate estimation.
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Monotonic time source backed by a hardware millisecond counter
///
/// The reader must return a non-wrapping 64-bit count. A 32-bit `millis()`
/// wraps after about 49.7 days; cast straight to `u64` it jumps back to zero,
/// after which every edge lands "before" the last accepted one and is
/// rejected. Extend such counters to 64 bits first (count the wraps, or use
/// the HAL's 64-bit timer).
///
/// Wraps the platform's `millis()`-style function:
/// ```rust
/// use rotasense_core::time::{MonotonicTime, TimeSource, Timestamp};
///
/// fn board_millis() -> Timestamp {
///     // read SysTick / RTC / esp_timer here
///     42
/// }
///
/// let clock = MonotonicTime::new(board_millis);
/// assert_eq!(clock.now(), 42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTime {
    read: fn() -> Timestamp,
}

impl MonotonicTime {
    /// Create from a function returning milliseconds since boot
    pub const fn new(read: fn() -> Timestamp) -> Self {
        Self { read }
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> Timestamp {
        (self.read)()
    }
}

/// Controllable time source for testing
///
/// Uses interior mutability so a test can keep advancing the clock while a
/// scheduler holds a shared reference to it.
#[derive(Debug, Clone, Default)]
pub struct MockTimeSource {
    timestamp: Cell<Timestamp>,
}

impl MockTimeSource {
    /// Start the clock at `timestamp`
    pub const fn new(timestamp: Timestamp) -> Self {
        Self { timestamp: Cell::new(timestamp) }
    }

    /// Jump to an absolute time
    pub fn set(&self, timestamp: Timestamp) {
        self.timestamp.set(timestamp);
    }

    /// Move the clock forward
    pub fn advance(&self, ms: u64) {
        self.timestamp.set(self.timestamp.get().saturating_add(ms));
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Timestamp {
        self.timestamp.get()
    }
}

/// Milliseconds elapsed from `earlier` to `later`, clamped at zero
#[inline]
pub fn elapsed_ms(earlier: Timestamp, later: Timestamp) -> u64 {
    later.saturating_sub(earlier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_advances() {
        let time = MockTimeSource::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);

        time.set(20);
        assert_eq!(time.now(), 20);
    }

    #[test]
    fn reference_forwards_to_source() {
        let time = MockTimeSource::new(7);
        let shared = &time;
        time.advance(3);
        assert_eq!(shared.now(), 10);
    }

    #[test]
    fn monotonic_reads_hardware_counter() {
        fn fixed() -> Timestamp {
            1234
        }
        let clock = MonotonicTime::new(fixed);
        assert_eq!(clock.now(), 1234);
    }

    #[test]
    fn elapsed_clamps_backwards_time() {
        assert_eq!(elapsed_ms(100, 250), 150);
        assert_eq!(elapsed_ms(250, 100), 0);
    }
}
