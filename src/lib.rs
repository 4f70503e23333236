mod bus;
mod calibration;
mod conversion;
mod correction;
mod error;
mod host;
mod monitor;
pub mod registers;
mod word;


pub use bus::{clean_start, open_bus, RegisterBus};
pub use calibration::*;
pub use conversion::*;
pub use correction::*;
pub use error::*;
pub use host::*;
pub use monitor::*;
pub use word::*;
pub use i2c_linux;
