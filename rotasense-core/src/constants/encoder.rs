//! Encoder Constants
//!
//! Resolution and signal conditioning defaults for slotted-disc optical
//! encoders read through a single edge-triggered input.

// ===== DISC RESOLUTION =====

/// Pulses per revolution of the bench encoder used with the serial monitor.
///
/// 64-slot disc, rising edges only.
pub const SERIAL_MONITOR_PULSES_PER_REV: u32 = 64;

/// Pulses per revolution of the wheel speed sensor.
///
/// 128-slot disc. Change this to match the installed disc.
pub const SPEED_SENSOR_PULSES_PER_REV: u32 = 128;

// ===== DEBOUNCE =====

/// Default refractory period between two accepted edges (milliseconds).
///
/// An edge arriving 3 ms or less after the previous accepted edge is treated
/// as bounce or noise. With millisecond timestamps the fastest accepted train
/// is one edge every 4 ms, which at 128 pulses per revolution caps the
/// measurable speed at about 117 RPM. Lower it for faster shafts.
pub const DEFAULT_REFRACTORY_MS: u32 = 3;

// ===== BUS =====

/// 7-bit I2C address the speed sensor answers on as a slave.
pub const SPEED_SENSOR_I2C_ADDRESS: u8 = 0x01;
