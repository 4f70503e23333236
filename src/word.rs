use crate::{RegisterBus, Result};

/// How the 16 bits of an assembled output word are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signedness {
    /// Two's complement, bit 15 is the sign.
    Signed,
    Unsigned,
}

/// Combines a low and a high register byte into a 16-bit word.
#[inline]
pub fn assemble_word(low: u8, high: u8, signedness: Signedness) -> i32 {
    let word = u16::from_le_bytes([low, high]);
    match signedness {
        Signedness::Signed => i32::from(word as i16),
        Signedness::Unsigned => i32::from(word),
    }
}

/// Low and high byte of a sensor output register pair, as read from the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawReading {
    pub low: u8,
    pub high: u8,
}

impl RawReading {
    /// Reads the low register first, then the high one.
    pub fn read(bus: &mut impl RegisterBus, low_register: u8, high_register: u8) -> Result<Self> {
        let low = bus.read_register(low_register)?;
        let high = bus.read_register(high_register)?;
        Ok(Self { low, high })
    }

    #[inline]
    pub fn word(self, signedness: Signedness) -> i32 {
        assemble_word(self.low, self.high, signedness)
    }
}
