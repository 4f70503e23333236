use crate::LinearMapping;

// LPS25H temperature transfer function, T = offset + raw / scale
pub const TEMP_OFFSET: f64 = 42.5;
pub const TEMP_SCALE: i32 = 480;

/// Decoding applied to the unsigned raw temperature word before the offset/scale formula.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TempDecoding {
    /// The word is the sensor's two's-complement output, as in the datasheet.
    #[default]
    Datasheet,
    /// Reproduces the readings of the legacy C tool: the decimal digits of the word are read
    /// as binary digits and the quotient is truncated to an integer.
    DigitReinterpretation,
}

/// Relative humidity in %rH. Values outside 0..=100 are passed through unchanged; the sensor
/// legitimately produces them outside its calibrated range.
#[inline]
pub fn compute_humidity(mapping: &LinearMapping, raw_humidity: i32) -> f64 {
    mapping.apply(raw_humidity)
}

/// Temperature at the sensor package in degrees Celsius, not yet corrected for host heat.
/// `raw_temp` is the unsigned assembled word.
pub fn compute_package_temp(raw_temp: i32, decoding: TempDecoding) -> f64 {
    match decoding {
        TempDecoding::Datasheet => {
            let signed = i32::from(raw_temp as u16 as i16);
            TEMP_OFFSET + f64::from(signed) / f64::from(TEMP_SCALE)
        }
        TempDecoding::DigitReinterpretation => {
            TEMP_OFFSET + f64::from(reinterpret_decimal_digits(raw_temp) / TEMP_SCALE)
        }
    }
}

/// Treats each decimal digit `d` at position `k` (counting from the least significant) as
/// contributing `d * 2^k`. Digits above 1 are kept as they are.
pub fn reinterpret_decimal_digits(n: i32) -> i32 {
    let mut rest = n;
    let mut result = 0;
    let mut base = 1;
    while rest != 0 {
        result += (rest % 10) * base;
        rest /= 10;
        base *= 2;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalibrationPoint;

    #[test]
    fn test_humidity_midpoint() {
        let mapping = LinearMapping::from_points(
            CalibrationPoint {
                raw_output: 0,
                value: 20.0,
            },
            CalibrationPoint {
                raw_output: 1000,
                value: 70.0,
            },
        )
        .unwrap();
        assert_eq!(compute_humidity(&mapping, 500), 45.0);
    }

    #[test]
    fn test_humidity_not_clamped() {
        let mapping = LinearMapping {
            gradient: 0.01,
            intercept: 50.0,
        };
        assert_eq!(compute_humidity(&mapping, 6000), 110.0);
        assert_eq!(compute_humidity(&mapping, -6000), -10.0);
    }

    #[test]
    fn test_datasheet_decoding() {
        assert_eq!(compute_package_temp(0, TempDecoding::Datasheet), 42.5);
        assert_eq!(compute_package_temp(480, TempDecoding::Datasheet), 43.5);
        // 0xe100 = -7936 in two's complement, 42.5 - 16.5333..
        let t = compute_package_temp(0xe100, TempDecoding::Datasheet);
        assert!((t - 25.966_667).abs() < 1e-5);
    }

    #[test]
    fn test_digit_reinterpretation() {
        assert_eq!(reinterpret_decimal_digits(0), 0);
        assert_eq!(reinterpret_decimal_digits(1011), 11);
        assert_eq!(reinterpret_decimal_digits(1101), 13);
        // digits above 1 are not rejected: 9*1 + 2*2 = 13
        assert_eq!(reinterpret_decimal_digits(29), 13);
        // 65535 -> 5 + 3*2 + 5*4 + 5*8 + 6*16
        assert_eq!(reinterpret_decimal_digits(65535), 167);
    }

    #[test]
    fn test_legacy_decoding_truncates() {
        // no u16 has enough digit weight to reach the scale, the quotient is always 0
        for raw in [0, 480, 11111, 59999, 65535] {
            assert_eq!(
                compute_package_temp(raw, TempDecoding::DigitReinterpretation),
                42.5
            );
        }
    }
}
