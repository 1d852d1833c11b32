//! Raw-reading dump for checking the accelerometer wiring: prints the three
//! axis counts as fast as they are worth looking at, no filtering, no
//! detection.

use std::{process, thread, time::Duration};

use accel::{Adxl345, ADXL345_DEVICE_ID};
use linux_embedded_hal::I2cdev;

/// Bus the accelerometer hangs off on this board.
static I2C_DEVICE: &str = "/dev/i2c-0";

static DUMP_PERIOD_MS: u64 = 50;

fn main() {
    env_logger::init();

    let i2c = match I2cdev::new(I2C_DEVICE) {
        Ok(i2c) => i2c,
        Err(err) => {
            log::error!("Failed to open i2c device {}: {}", I2C_DEVICE, err);
            process::exit(1);
        }
    };
    let mut sensor = Adxl345::new(i2c);

    match sensor.get_device_id() {
        Ok(id) => println!("ADXL345 DEVID = 0x{:02X} (expect 0x{:02X})", id, ADXL345_DEVICE_ID),
        Err(err) => log::warn!("Could not read DEVID: {:?}", err),
    }

    if let Err(err) = sensor.start_measuring() {
        log::warn!("Failed to configure sensor: {:?}", err);
    }

    println!("Reading ADXL345 acceleration (Ctrl+C to stop)...");

    loop {
        match sensor.get_accel_raw() {
            Ok(reading) => println!("AX={:6}  AY={:6}  AZ={:6}", reading.x, reading.y, reading.z),
            Err(err) => log::warn!("Failed to read accel data: {:?}", err),
        }
        thread::sleep(Duration::from_millis(DUMP_PERIOD_MS));
    }
}
