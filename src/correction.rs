// empirical fit for the Sense HAT sitting on top of the Raspberry Pi SoC
pub const HOST_HEAT_FACTOR: f64 = 5.466;
pub const HOST_HEAT_BIAS: f64 = 6.0;

/// Estimates the ambient temperature from the sensor package temperature and the temperature
/// of the host processor heating it.
#[inline]
pub fn correct_temperature(package_temp: f64, host_temp: f64) -> f64 {
    package_temp - (host_temp - package_temp) / HOST_HEAT_FACTOR - HOST_HEAT_BIAS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correction() {
        let corrected = correct_temperature(25.0, 40.0);
        assert!((corrected - 16.256).abs() < 1e-3, "got {}", corrected);
    }

    #[test]
    fn test_equal_temperatures_only_remove_bias() {
        assert_eq!(correct_temperature(30.0, 30.0), 24.0);
    }

    #[test]
    fn test_missing_host_temp_still_computes() {
        // host temperature falls back to 0 when unavailable
        let corrected = correct_temperature(25.0, 0.0);
        assert!((corrected - (25.0 + 25.0 / 5.466 - 6.0)).abs() < 1e-9);
    }
}
