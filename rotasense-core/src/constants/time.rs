//! Time-Related Constants
//!
//! Unit conversions and the sampling windows used by the bundled presets.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u32 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Milliseconds per minute.
///
/// Numerator of the RPM conversion: one window of `w` ms repeats
/// `MS_PER_MINUTE / w` times per minute.
pub const MS_PER_MINUTE: u32 = MS_PER_SECOND * SECONDS_PER_MINUTE;

// ===== SAMPLING WINDOWS =====

/// Serial monitor report rate (Hz).
pub const SERIAL_MONITOR_RATE_HZ: u32 = 20;

/// Serial monitor sampling window (milliseconds).
///
/// 20 Hz output, 50 ms per window.
pub const SERIAL_MONITOR_WINDOW_MS: u32 = MS_PER_SECOND / SERIAL_MONITOR_RATE_HZ;

/// Speed sensor update rate (Hz).
pub const SPEED_SENSOR_RATE_HZ: u32 = 60;

/// Speed sensor sampling window (milliseconds).
///
/// Integer division of 1000 / 60, so the window is 16 ms rather than
/// 16.67 ms. 60000 is not a multiple of 16, which is why the RPM conversion
/// runs in floating point.
pub const SPEED_SENSOR_WINDOW_MS: u32 = MS_PER_SECOND / SPEED_SENSOR_RATE_HZ;
