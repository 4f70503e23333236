//! Reports humidity and host-heat-corrected temperature from the Sense HAT once a minute.
//!
//! ```
//! $ cargo run --release -- /dev/i2c-1
//! Humidity: 41% rH
//! Temperature: 22 celsius
//! ```

use sensehat_climate::{open_bus, Config, Monitor};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = Config::default();
    if let Some(path) = std::env::args_os().nth(1) {
        config.bus_path = path.into();
    }

    let bus = open_bus(&config.bus_path, config.address).inspect_err(log_fatal)?;
    let mut monitor = Monitor::start(bus, config).inspect_err(log_fatal)?;
    match monitor.run().inspect_err(log_fatal)? {}
}

fn log_fatal(err: &sensehat_climate::Error) {
    use std::error::Error as _;

    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    log::error!("{}", message);
}
