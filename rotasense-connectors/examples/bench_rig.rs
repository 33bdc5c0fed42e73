//! Simulated bench rig
//!
//! A thread plays the encoder interrupt, spinning the wheel up to 120 RPM
//! and back down. The main loop polls the scheduler, prints one serial line
//! per window and refreshes the I2C speed register, answering a fake bus
//! master every 250 ms.
//!
//! Run with: cargo run --example bench_rig

use std::thread;
use std::time::{Duration, Instant};

use rotasense_connectors::{Reporter, SerialLineReporter, SpeedRegister};
use rotasense_core::time::MonotonicTime;
use rotasense_core::{EstimatorConfig, PulseRateEstimator, SampleScheduler, Timestamp};

static SPEED: SpeedRegister = SpeedRegister::new(0x01);

fn millis() -> Timestamp {
    use std::sync::OnceLock;
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_millis() as Timestamp
}

/// Wheel speed profile: ramp up, hold, ramp down over three seconds
fn target_rpm(t_ms: Timestamp) -> f64 {
    match t_ms {
        0..=999 => 120.0 * t_ms as f64 / 1000.0,
        1000..=1999 => 120.0,
        2000..=2999 => 120.0 * (3000 - t_ms) as f64 / 1000.0,
        _ => 0.0,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EstimatorConfig::i2c_speed_sensor();
    let pulses_per_rev = config.pulses_per_revolution as f64;
    let mut estimator = PulseRateEstimator::<7>::new(config)?;
    let (edges, mut sampler) = estimator.split();
    let mut scheduler = SampleScheduler::new(MonotonicTime::new(millis));

    let mut line = String::new();
    let mut serial = SerialLineReporter::new(&mut line);
    let mut register = &SPEED;
    let mut next_request = 250;

    thread::scope(|s| {
        let encoder = s.spawn(move || {
            let mut phase = 0.0;
            while millis() < 3000 {
                phase += target_rpm(millis()) * pulses_per_rev / 60_000.0;
                while phase >= 1.0 {
                    edges.on_edge(millis());
                    phase -= 1.0;
                }
                thread::sleep(Duration::from_millis(1));
            }
        });

        while !encoder.is_finished() {
            match scheduler.poll(&mut sampler) {
                Ok(report) => {
                    serial.report(&report)?;
                    register.report(&report)?;
                }
                Err(nb::Error::WouldBlock) => thread::sleep(Duration::from_micros(200)),
                Err(nb::Error::Other(never)) => match never {},
            }

            if millis() >= next_request {
                next_request += 250;
                let payload = SPEED.on_request()?;
                print!("[i2c 0x{:02x}] {}", SPEED.address(), payload);
            }
        }
        Ok::<_, rotasense_connectors::ReportError>(())
    })?;

    print!("{}", serial.into_inner());
    println!("total pulses: {}", sampler.total_pulses());
    Ok(())
}
