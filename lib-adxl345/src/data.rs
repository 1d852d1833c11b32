use math::Vector;

use crate::LSB_PER_G;

/// One accelerometer sample in raw sensor counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawReading
{
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawReading {

    /// Decodes the 6-byte block starting at `DATAX0`: three little-endian signed
    /// 16-bit values, x axis first.
    ///
    pub fn from_le_bytes(data: &[u8; 6]) -> Self {
        RawReading {
            x: i16::from_le_bytes([data[0], data[1]]),
            y: i16::from_le_bytes([data[2], data[3]]),
            z: i16::from_le_bytes([data[4], data[5]]),
        }
    }

    /// Converts the raw counts to acceleration in g using the full-resolution
    /// scale factor.
    ///
    pub fn to_g(&self) -> Vector {
        Vector::new(self.x as f32, self.y as f32, self.z as f32) / LSB_PER_G
    }
}
