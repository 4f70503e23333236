//! Factory calibration of the humidity channel.
//!
//! The HTS221 stores two points of its transfer function in non-volatile registers: for each
//! point the raw output the sensor produced and the relative humidity it was exposed to (in
//! half-percent steps). The points define a straight line that maps any live raw output to %rH.

use crate::registers::*;
use crate::word::{RawReading, Signedness};
use crate::{CalibrationError, RegisterBus, Result};

/// One (raw output, physical value) sample burned in at manufacture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationPoint {
    pub raw_output: i16,
    pub value: f64,
}

impl CalibrationPoint {
    /// Builds a point from the sensor encoding, where the value byte holds the value times two.
    pub fn from_registers(raw: RawReading, value_x2: u8) -> Self {
        // a signed word always fits i16
        let raw_output = raw.word(Signedness::Signed) as i16;
        Self {
            raw_output,
            value: f64::from(value_x2) / 2.0,
        }
    }
}

/// Linear transfer function `value = gradient * raw + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMapping {
    pub gradient: f64,
    pub intercept: f64,
}

impl LinearMapping {
    /// Derives the line through two calibration points. Points sharing a raw output don't
    /// define a slope and are rejected.
    pub fn from_points(
        p0: CalibrationPoint,
        p1: CalibrationPoint,
    ) -> std::result::Result<Self, CalibrationError> {
        if p0.raw_output == p1.raw_output {
            return Err(CalibrationError::DegenerateSlope {
                raw_output: p0.raw_output,
            });
        }
        let gradient =
            (p1.value - p0.value) / (f64::from(p1.raw_output) - f64::from(p0.raw_output));
        let intercept = p1.value - gradient * f64::from(p1.raw_output);
        Ok(Self {
            gradient,
            intercept,
        })
    }

    #[inline]
    pub fn apply(&self, raw: i32) -> f64 {
        self.gradient * f64::from(raw) + self.intercept
    }
}

/// Reads both humidity calibration points from the sensor and derives the %rH mapping. Issues
/// register reads only.
pub fn resolve_humidity_mapping(bus: &mut impl RegisterBus) -> Result<LinearMapping> {
    let h0_out = RawReading::read(bus, H0_T0_OUT_L, H0_T0_OUT_H)?;
    let h1_out = RawReading::read(bus, H1_T0_OUT_L, H1_T0_OUT_H)?;
    let h0_rh_x2 = bus.read_register(H0_RH_X2)?;
    let h1_rh_x2 = bus.read_register(H1_RH_X2)?;

    let p0 = CalibrationPoint::from_registers(h0_out, h0_rh_x2);
    let p1 = CalibrationPoint::from_registers(h1_out, h1_rh_x2);
    log::debug!("humidity calibration points {:?} {:?}", p0, p1);

    let mapping = LinearMapping::from_points(p0, p1)?;
    log::info!(
        "humidity mapping: gradient {:.6}, intercept {:.3}",
        mapping.gradient,
        mapping.intercept
    );
    Ok(mapping)
}
