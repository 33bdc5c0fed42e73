//! Constants for RotaSense Core
//!
//! Compile-time defaults for the encoder front end. Firmware is configured by
//! reflashing, so every tunable lives here with its unit in the name.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Encoder**: disc resolution, debounce and bus addressing
//! - **Time**: unit conversions and sampling windows
//! - **Buffers**: smoothing window and payload capacities
//! - **Motion**: wheel geometry and speed unit conversions

/// Encoder disc resolution, debounce periods and bus addresses.
pub mod encoder;

/// Time unit conversions and sampling windows.
pub mod time;

/// Moving-average window and payload buffer sizes.
pub mod buffers;

/// Wheel geometry and linear speed conversions.
pub mod motion;

// Re-export commonly used constants for convenience
pub use encoder::{
    SERIAL_MONITOR_PULSES_PER_REV, SPEED_SENSOR_PULSES_PER_REV,
    DEFAULT_REFRACTORY_MS, SPEED_SENSOR_I2C_ADDRESS,
};

pub use time::{
    MS_PER_SECOND, SECONDS_PER_MINUTE, MS_PER_MINUTE,
    SERIAL_MONITOR_WINDOW_MS, SPEED_SENSOR_WINDOW_MS,
};

pub use buffers::{DEFAULT_AVERAGE_WINDOW, SPEED_PAYLOAD_CAPACITY};

pub use motion::{KPH_PER_MPS, SPEED_SENSOR_WHEEL_DIAMETER_M};
