//! Motion Constants
//!
//! Conversions from shaft rotation to linear travel.

/// Kilometres per hour in one metre per second.
pub const KPH_PER_MPS: f32 = 3.6;

/// Wheel diameter of the speed sensor rig (metres).
pub const SPEED_SENSOR_WHEEL_DIAMETER_M: f32 = 0.33;
