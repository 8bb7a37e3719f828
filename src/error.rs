//! Error types for speed-keys

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// speed-keys error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Serial port error
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Virtual keyboard backend failed
    #[error("Keyboard error: {0}")]
    Keyboard(String),

    /// Sensor link went away
    #[error("Sensor disconnected")]
    Disconnected,

    /// Shutdown was requested while waiting for data
    #[error("Interrupted")]
    Interrupted,

    /// Too many consecutive unparseable lines
    #[error("No valid speed reading after {attempts} lines")]
    NoValidReading {
        /// Number of non-empty lines rejected
        attempts: u32,
    },

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<enigo::NewConError> for Error {
    fn from(e: enigo::NewConError) -> Self {
        Error::Keyboard(e.to_string())
    }
}

impl From<enigo::InputError> for Error {
    fn from(e: enigo::InputError) -> Self {
        Error::Keyboard(e.to_string())
    }
}
