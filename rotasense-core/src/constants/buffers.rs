//! Buffer Sizes
//!
//! Everything here is sized at compile time; nothing in the estimator
//! allocates.

/// Default moving-average window (samples).
///
/// 7 windows of 16 ms smooth over roughly 110 ms, enough to hide the
/// one-pulse quantization step at low speed without lagging a wheel.
pub const DEFAULT_AVERAGE_WINDOW: usize = 7;

/// Capacity of the I2C speed payload (bytes).
///
/// Longest payload is `"speed:2147483647\n"`, 17 bytes.
pub const SPEED_PAYLOAD_CAPACITY: usize = 24;
