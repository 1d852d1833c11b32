pub const DEVID: u8 = 0x00; // fixed device ID, always 0xE5

pub const THRESH_TAP: u8 = 0x1D;

pub const OFSX: u8 = 0x1E; // user offset, 15.6 mg/LSB
pub const OFSY: u8 = 0x1F;
pub const OFSZ: u8 = 0x20;

pub const DUR: u8 = 0x21;
pub const LATENT: u8 = 0x22;
pub const WINDOW: u8 = 0x23;

pub const THRESH_ACT: u8 = 0x24;
pub const THRESH_INACT: u8 = 0x25;
pub const TIME_INACT: u8 = 0x26;
pub const ACT_INACT_CTL: u8 = 0x27;

pub const THRESH_FF: u8 = 0x28;
pub const TIME_FF: u8 = 0x29;

pub const TAP_AXES: u8 = 0x2A;
pub const ACT_TAP_STATUS: u8 = 0x2B;

pub const BW_RATE: u8 = 0x2C; // [4] LOW_POWER, [3:0] output data rate

pub const POWER_CTL: u8 = 0x2D;
pub const INT_ENABLE: u8 = 0x2E;
pub const INT_MAP: u8 = 0x2F;
pub const INT_SOURCE: u8 = 0x30;

pub const DATA_FORMAT: u8 = 0x31; // [3] FULL_RES, [2] justify, [1:0] range

pub const DATAX0: u8 = 0x32; // x/y/z as three little-endian i16s, 0x32..=0x37
pub const DATAX1: u8 = 0x33;
pub const DATAY0: u8 = 0x34;
pub const DATAY1: u8 = 0x35;
pub const DATAZ0: u8 = 0x36;
pub const DATAZ1: u8 = 0x37;

pub const FIFO_CTL: u8 = 0x38;
pub const FIFO_STATUS: u8 = 0x39;

/// `POWER_CTL` bit that switches from standby to measurement mode.
pub const POWER_CTL_MEASURE: u8 = 0x08;

/// `DATA_FORMAT` bit for full-resolution mode: 3.9 mg/LSB at every range.
pub const DATA_FORMAT_FULL_RES: u8 = 0x08;
