use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::registers::*;
use crate::word::{RawReading, Signedness};
use crate::*;

pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Fixed parameters of a monitoring session.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bus_path: PathBuf,
    pub address: u16,
    pub thermal_zone: PathBuf,
    pub interval: Duration,
    pub temp_decoding: TempDecoding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bus_path: DEFAULT_BUS_PATH.into(),
            address: DEVICE_ADDRESS,
            thermal_zone: THERMAL_ZONE_PATH.into(),
            interval: POLL_INTERVAL,
            temp_decoding: TempDecoding::default(),
        }
    }
}

/// Readings of one poll cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSnapshot {
    /// %rH
    pub humidity: f64,
    pub package_temp: f64,
    pub host_temp: f64,
    pub corrected_temp: f64,
}

impl fmt::Display for SensorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Humidity: {:.0}% rH", self.humidity)?;
        write!(f, "Temperature: {:.0} celsius", self.corrected_temp)
    }
}

/// Session state shared by all poll cycles: the bus and the humidity mapping derived once at
/// start-up.
pub struct Monitor<B: RegisterBus> {
    bus: B,
    mapping: LinearMapping,
    config: Config,
}

impl<B: RegisterBus> Monitor<B> {
    /// Power-cycles the sensor and resolves its calibration.
    pub fn start(mut bus: B, config: Config) -> Result<Self> {
        clean_start(&mut bus)?;
        let mapping = resolve_humidity_mapping(&mut bus)?;
        Ok(Self {
            bus,
            mapping,
            config,
        })
    }

    pub fn mapping(&self) -> &LinearMapping {
        &self.mapping
    }

    pub fn poll(&mut self) -> Result<SensorSnapshot> {
        let humidity_raw = RawReading::read(&mut self.bus, HUMIDITY_OUT_L, HUMIDITY_OUT_H)?;
        let temp_raw = RawReading::read(&mut self.bus, TEMP_OUT_L, TEMP_OUT_H)?;
        log::trace!("raw humidity {:?}, raw temperature {:?}", humidity_raw, temp_raw);

        let humidity = compute_humidity(&self.mapping, humidity_raw.word(Signedness::Signed));
        let package_temp = compute_package_temp(
            temp_raw.word(Signedness::Unsigned),
            self.config.temp_decoding,
        );
        let host_temp = read_host_temp_celsius(&self.config.thermal_zone);
        let corrected_temp = correct_temperature(package_temp, host_temp);

        let snapshot = SensorSnapshot {
            humidity,
            package_temp,
            host_temp,
            corrected_temp,
        };
        log::debug!("{:?}", snapshot);
        Ok(snapshot)
    }

    /// Polls and prints forever. Returns only when the bus fails.
    pub fn run(&mut self) -> Result<Infallible> {
        loop {
            let snapshot = self.poll()?;
            println!("{}", snapshot);
            std::thread::sleep(self.config.interval);
        }
    }
}
