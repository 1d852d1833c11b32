use std::{error::Error, fmt, io};

use linux_embedded_hal::i2cdev::linux::LinuxI2CError;

/// Startup failures. Anything that goes wrong after startup is logged and
/// retried inside the loop instead of surfacing here.
#[derive(Debug)]
pub enum AppError
{
    I2cOpen(LinuxI2CError),
    Mmio(io::Error),
}

impl Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::I2cOpen(err) => write!(f, "Failed to open i2c device: {}", err),
            Self::Mmio(err) => write!(f, "Failed to map physical memory: {}", err),
        }
    }
}

impl From<LinuxI2CError> for AppError
{
    fn from(err: LinuxI2CError) -> Self {
        AppError::I2cOpen(err)
    }
}

impl From<io::Error> for AppError
{
    fn from(err: io::Error) -> Self {
        AppError::Mmio(err)
    }
}
