//! Register map of the HTS221 humidity sensor together with the temperature output
//! registers read at the same bus address.

// fixed bus location on the Sense HAT
pub const DEFAULT_BUS_PATH: &str = "/dev/i2c-1";
pub const DEVICE_ADDRESS: u16 = 0x5f;

pub const CTRL_REG1: u8 = 0x20;

// values written to CTRL_REG1
pub const POWER_DOWN: u8 = 0x00;
pub const POWER_UP_BDU: u8 = 0x84; // PD | BDU, one-shot output data rate

// live humidity output
pub const HUMIDITY_OUT_L: u8 = 0x28;
pub const HUMIDITY_OUT_H: u8 = 0x29;

// live temperature output
pub const TEMP_OUT_L: u8 = 0x2b;
pub const TEMP_OUT_H: u8 = 0x2c;

// humidity calibration, y-axis (%rH x2)
pub const H0_RH_X2: u8 = 0x30;
pub const H1_RH_X2: u8 = 0x31;

// humidity calibration, x-axis (raw output)
pub const H0_T0_OUT_L: u8 = 0x36;
pub const H0_T0_OUT_H: u8 = 0x37;
pub const H1_T0_OUT_L: u8 = 0x3a;
pub const H1_T0_OUT_H: u8 = 0x3b;
