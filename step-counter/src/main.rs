use std::process;

use accel::{Adxl345, ADXL345_DEVICE_ID};
use linux_embedded_hal::I2cdev;

use crate::app::StepCounter;
use crate::clock::SystemClock;
use crate::error::AppError;
use crate::mmio::LedBank;

pub mod app;
pub mod clock;
pub mod error;
pub mod mmio;

/// Bus the accelerometer hangs off on this board.
static I2C_DEVICE: &str = "/dev/i2c-0";

fn main() {
    env_logger::init();

    match setup() {
        Ok(mut counter) => counter.run(),
        Err(err) => {
            log::error!("{}", err);
            process::exit(1);
        }
    }
}

/// Opens the bus, probes and configures the sensor, and maps the LED bank.
/// Only an unusable environment (no bus device, no physical mapping) is fatal
/// here; a sensor that answers strangely is reported and left to the loop's
/// per-iteration retries.
fn setup() -> Result<StepCounter<I2cdev, LedBank, SystemClock>, AppError> {
    let i2c = I2cdev::new(I2C_DEVICE)?;
    let mut sensor = Adxl345::new(i2c);

    match sensor.get_device_id() {
        Ok(id) if id == ADXL345_DEVICE_ID => log::info!("ADXL345 DEVID = 0x{:02X}", id),
        Ok(id) => log::warn!("Unexpected DEVID 0x{:02X} (expect 0x{:02X})", id, ADXL345_DEVICE_ID),
        Err(err) => log::warn!("Could not read DEVID: {:?}", err),
    }

    if let Err(err) = sensor.start_measuring() {
        log::warn!("Failed to configure sensor, leaving it to the loop: {:?}", err);
    }

    let leds = LedBank::open()?;

    println!("Starting step detector (Ctrl+C to stop)...");
    Ok(StepCounter::new(sensor, leds, SystemClock::new()))
}
