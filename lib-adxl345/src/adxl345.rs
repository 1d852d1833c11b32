use embedded_hal::i2c::I2c;
use math::Vector;

use crate::registers::*;
use crate::{RawReading, ADXL345_DEFAULT_I2C_ADDR, ADXL345_DEVICE_ID};

pub struct Adxl345<I2C>
{
    /// i2c bus that we actually use to communicate with the ADXL345 chip.
    pub i2c: I2C,

    /// i2c address that the chip is located at.
    address: u8,
}

impl<I2C: I2c> Adxl345<I2C>
{
    /// Create a new ADXL345 instance on the given i2c bus, at the default
    /// address.
    ///
    pub fn new(i2c: I2C) -> Self {
        Adxl345 {
            i2c,
            address: ADXL345_DEFAULT_I2C_ADDR,
        }
    }

    /// Create a new ADXL345 instance at a non-default address (boards that strap
    /// the ALT ADDRESS pin high).
    ///
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Adxl345 { i2c, address }
    }

    /// Gets the device ID of this chip, practically this just gets the contents
    /// of the `DEVID` register. Reads 0xE5 on a real ADXL345.
    ///
    pub fn get_device_id(&mut self) -> Result<u8, I2C::Error> {
        self.get_register_value(DEVID)
    }

    /// Checks if the i2c connection with the chip is working as expected,
    /// practically speaking this just checks if it can read the device ID and if
    /// the device ID is the expected value.
    ///
    pub fn connection_okay(&mut self) -> bool {
        self.get_device_id().map(|id| id == ADXL345_DEVICE_ID).unwrap_or(false)
    }

    /// Puts the chip into full-resolution measurement mode. Until this runs the
    /// data registers stay frozen at their power-on contents.
    ///
    pub fn start_measuring(&mut self) -> Result<(), I2C::Error> {
        log::debug!("Configuring ADXL345: full resolution, measurement mode");
        self.set_register_value(DATA_FORMAT, DATA_FORMAT_FULL_RES)?;
        self.set_register_value(POWER_CTL, POWER_CTL_MEASURE)
    }

    /// Puts the chip back into standby. Measurements stop, configuration
    /// survives.
    ///
    pub fn standby(&mut self) -> Result<(), I2C::Error> {
        self.set_register_value(POWER_CTL, 0x00)
    }

    /// Get the current acceleration in raw sensor counts. This is a single
    /// 6-byte transaction starting at `DATAX0`; the chip latches all three axes
    /// together, so the sample is coherent.
    ///
    pub fn get_accel_raw(&mut self) -> Result<RawReading, I2C::Error> {
        let mut data = [0u8; 6];
        self.i2c.write_read(self.address, &[DATAX0], &mut data)?;
        Ok(RawReading::from_le_bytes(&data))
    }

    /// Get the current acceleration in g.
    ///
    pub fn get_accel(&mut self) -> Result<Vector, I2C::Error> {
        Ok(self.get_accel_raw()?.to_g())
    }

    pub fn get_register_value(&mut self, register: u8) -> Result<u8, I2C::Error> {
        let mut state = [0u8];
        self.i2c.write_read(self.address, &[register], &mut state)?;
        Ok(state[0])
    }

    pub fn set_register_value(&mut self, register: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[register, value])
    }
}
