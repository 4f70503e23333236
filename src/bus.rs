use std::fs::File;
use std::path::Path;

use i2c::{Address, Smbus};
use i2c_linux::I2c;

use crate::registers::{CTRL_REG1, POWER_DOWN, POWER_UP_BDU};
use crate::{Error, Result};

/// Byte-wide register access to a single I2C peripheral. Implemented for the Linux i2c-dev
/// character device and replaced with `MockBus` for testing.
pub trait RegisterBus {
    fn read_register(&mut self, register: u8) -> Result<u8>;

    fn write_register(&mut self, register: u8, value: u8) -> Result<()>;
}

impl RegisterBus for I2c<File> {
    #[inline]
    fn read_register(&mut self, register: u8) -> Result<u8> {
        self.smbus_read_byte_data(register)
            .map_err(|source| Error::Register { register, source })
    }

    #[inline]
    fn write_register(&mut self, register: u8, value: u8) -> Result<()> {
        self.smbus_write_byte_data(register, value)
            .map_err(|source| Error::Register { register, source })
    }
}

/// Opens an i2c-dev node and binds it to a 7-bit peripheral address.
pub fn open_bus(path: impl AsRef<Path>, address: u16) -> Result<I2c<File>> {
    let path = path.as_ref();
    let mut bus = I2c::from_path(path).map_err(|source| Error::Open {
        path: path.to_owned(),
        source,
    })?;
    bus.set_slave_address(address, false)
        .map_err(|source| Error::Configure { address, source })?;
    log::info!("opened {} at address {:#04x}", path.display(), address);
    Ok(bus)
}

/// Power-cycles the sensor so that it starts from a known state.
pub fn clean_start(bus: &mut impl RegisterBus) -> Result<()> {
    log::debug!("power cycling sensor");
    bus.write_register(CTRL_REG1, POWER_DOWN)?;
    bus.write_register(CTRL_REG1, POWER_UP_BDU)
}


#[cfg(test)]
mod tests {
    use super::mock::MockBus;
    use super::*;

    #[test]
    fn test_clean_start_power_cycles() {
        let mut bus = MockBus::new();
        clean_start(&mut bus).unwrap();
        assert_eq!(
            bus.writes,
            [(CTRL_REG1, POWER_DOWN), (CTRL_REG1, POWER_UP_BDU)]
        );
        assert!(bus.reads.is_empty(), "no reads expected during clean start");
    }

    #[test]
    fn test_missing_register_fails() {
        let mut bus = MockBus::new();
        let err = bus.read_register(0x28).unwrap_err();
        assert!(matches!(err, Error::Register { register: 0x28, .. }));
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotConnected));
    }

    #[test]
    fn test_open_missing_bus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("i2c-missing");
        match open_bus(&path, 0x5f) {
            Err(Error::Open { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Error::Open, got {:?}", other.map(|_| ())),
        }
    }
}
