//! I2C slave speed register
//!
//! The rig answers a bus master's read request with the last computed speed
//! as an ASCII line, `speed:<km/h>\n`, where km/h is the absolute
//! instantaneous speed truncated toward zero.
//!
//! The main loop stores with [`SpeedRegister::update`]; the bus request
//! handler reads with [`SpeedRegister::on_request`]. Both take `&self`, and
//! the value lives in an atomic, so the register can sit in a `static` shared
//! between the loop and the I2C interrupt.

use core::fmt::Write;
use core::sync::atomic::{AtomicI32, Ordering};

use heapless::String;
use rotasense_core::constants::{SPEED_PAYLOAD_CAPACITY, SPEED_SENSOR_I2C_ADDRESS};
use rotasense_core::RateReport;

use crate::{ReportError, Reporter};

/// Fixed-size request payload
pub type SpeedPayload = String<SPEED_PAYLOAD_CAPACITY>;

/// Last reported speed, served on bus read requests
#[derive(Debug)]
pub struct SpeedRegister {
    address: u8,
    speed_kph: AtomicI32,
}

impl SpeedRegister {
    /// Register answering at the given 7-bit slave address
    pub const fn new(address: u8) -> Self {
        Self {
            address,
            speed_kph: AtomicI32::new(0),
        }
    }

    /// Configured slave address
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Store the speed from a report
    ///
    /// Reports without a wheel configuration leave the register untouched.
    pub fn update(&self, report: &RateReport) {
        if let Some(kph) = report.speed_kph() {
            self.store_kph(kph);
        }
    }

    /// Store a speed directly, as absolute km/h truncated toward zero
    pub fn store_kph(&self, kph: f32) {
        // `as` saturates and maps NaN to 0
        let whole = libm::truncf(libm::fabsf(kph)) as i32;
        self.speed_kph.store(whole, Ordering::Relaxed);
    }

    /// Last stored speed in whole km/h
    pub fn speed_kph(&self) -> i32 {
        self.speed_kph.load(Ordering::Relaxed)
    }

    /// Build the answer to a master read request
    pub fn on_request(&self) -> Result<SpeedPayload, ReportError> {
        let mut payload = SpeedPayload::new();
        writeln!(payload, "speed:{}", self.speed_kph()).map_err(|_| ReportError::PayloadOverflow {
            capacity: SPEED_PAYLOAD_CAPACITY,
        })?;

        #[cfg(feature = "log")]
        log::trace!("I2C 0x{:02x} answered {:?}", self.address, payload.as_str());

        Ok(payload)
    }
}

impl Default for SpeedRegister {
    fn default() -> Self {
        Self::new(SPEED_SENSOR_I2C_ADDRESS)
    }
}

impl Reporter for SpeedRegister {
    type Error = ReportError;

    fn report(&mut self, report: &RateReport) -> Result<(), Self::Error> {
        self.update(report);
        Ok(())
    }
}

impl Reporter for &SpeedRegister {
    type Error = ReportError;

    fn report(&mut self, report: &RateReport) -> Result<(), Self::Error> {
        self.update(report);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fugit::MillisDurationU32;
    use rotasense_core::{EstimatorConfig, PulseRateEstimator};

    fn report_with_speed(speed_mps: Option<f32>) -> RateReport {
        RateReport {
            timestamp: 16,
            raw_pulse_count: 0,
            instantaneous_rpm: 0.0,
            average_rpm: 0.0,
            instantaneous_speed: speed_mps,
            average_speed: speed_mps,
            total_pulses: 0,
            total_rotations: 0.0,
        }
    }

    #[test]
    fn serves_zero_before_first_report() {
        let register = SpeedRegister::default();
        assert_eq!(register.address(), 0x01);
        assert_eq!(register.on_request().unwrap().as_str(), "speed:0\n");
    }

    #[test]
    fn truncates_and_drops_sign() {
        let register = SpeedRegister::new(0x10);

        register.store_kph(12.9);
        assert_eq!(register.on_request().unwrap().as_str(), "speed:12\n");

        register.store_kph(-7.6);
        assert_eq!(register.on_request().unwrap().as_str(), "speed:7\n");

        register.store_kph(f32::NAN);
        assert_eq!(register.speed_kph(), 0);
    }

    #[test]
    fn report_without_wheel_keeps_last_value() {
        let mut register = SpeedRegister::default();
        register.report(&report_with_speed(Some(5.0))).unwrap();
        assert_eq!(register.speed_kph(), 18);

        register.report(&report_with_speed(None)).unwrap();
        assert_eq!(register.speed_kph(), 18);
    }

    #[test]
    fn static_register_shared_by_reference() {
        static REGISTER: SpeedRegister = SpeedRegister::new(SPEED_SENSOR_I2C_ADDRESS);

        let mut sink = &REGISTER;
        sink.report(&report_with_speed(Some(2.5))).unwrap();
        assert_eq!(REGISTER.on_request().unwrap().as_str(), "speed:9\n");
    }

    #[test]
    fn estimator_feeds_register() {
        // 1 m wheel, 10 pulses per rev, 1 s window
        let config = EstimatorConfig::new(MillisDurationU32::millis(1000), 10)
            .without_debounce()
            .with_wheel_circumference(1.0);
        let mut estimator = PulseRateEstimator::<7>::new(config).unwrap();
        for t in 0..50 {
            estimator.on_edge(t);
        }
        let report = estimator.sample_window(1000);

        let register = SpeedRegister::default();
        register.update(&report);
        // 5 rev/s on a 1 m wheel is 18 km/h
        assert_eq!(register.on_request().unwrap().as_str(), "speed:18\n");
    }
}
