use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unable to open i2c bus {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to configure i2c slave {address:#04x}")]
    Configure {
        address: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("i2c transfer failed for register {register:#04x}")]
    Register {
        register: u8,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid sensor calibration")]
    Calibration(#[from] CalibrationError),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationError {
    #[error("both calibration points have raw output {raw_output}, slope is undefined")]
    DegenerateSlope { raw_output: i16 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Kind of the underlying I/O failure, if any.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Error::Open { source, .. }
            | Error::Configure { source, .. }
            | Error::Register { source, .. } => Some(source.kind()),
            Error::Calibration(_) => None,
        }
    }
}
