use std::path::Path;

/// Thermal zone of the Raspberry Pi SoC, in millidegrees Celsius.
pub const THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Reads the host processor temperature in degrees Celsius.
///
/// A missing or unreadable file or malformed content yields 0.0 instead of an error. The
/// caller keeps reporting with that value.
pub fn read_host_temp_celsius(path: impl AsRef<Path>) -> f64 {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse_millidegrees(&contents) {
            Some(celsius) => celsius,
            None => {
                log::warn!(
                    "unexpected content in {}: {:?}, using 0",
                    path.display(),
                    contents
                );
                0.0
            }
        },
        Err(err) => {
            log::warn!("unable to read {}: {}, using 0", path.display(), err);
            0.0
        }
    }
}

/// Parses the first line of a thermal zone file. The line must consist of decimal digits
/// only; a trailing line terminator is allowed.
pub fn parse_millidegrees(contents: &str) -> Option<f64> {
    let line = contents.lines().next()?;
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let millidegrees: u32 = line.parse().ok()?;
    Some(f64::from(millidegrees) / 1000.0)
}
