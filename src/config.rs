//! Configuration for speed-keys
//!
//! Loaded from a TOML file; every field has a default so a partial file (or
//! no file at all) is valid.

use crate::error::{Error, Result};
use crate::keyboard::KeyCode;
use crate::motion::DEFAULT_RUN_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "speed-keys.toml";

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub serial: SerialConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub keys: KeysConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Serial link to the speed sensor
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SerialConfig {
    /// Port name (e.g. "COM9", "/dev/rfcomm0")
    #[serde(default = "default_port")]
    pub port: String,

    /// Baud rate (default: 115200)
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,

    /// Per-read timeout in milliseconds (default: 1000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Give up after this many unparseable lines in one reading
    ///
    /// `None` waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}

/// Speed classification
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MotionConfig {
    /// Speeds strictly above this (km/h) count as running
    #[serde(default = "default_run_threshold")]
    pub run_threshold: f64,
}

/// Key bindings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeysConfig {
    /// Held while moving (default: "w")
    #[serde(default = "default_forward_key")]
    pub forward: String,

    /// Held while running (default: "shift")
    #[serde(default = "default_modifier_key")]
    pub modifier: String,
}

/// Console output
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Clear the terminal before each status line
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_port() -> String {
    if cfg!(target_os = "windows") {
        "COM9".to_string()
    } else {
        "/dev/rfcomm0".to_string()
    }
}

fn default_baud_rate() -> u32 {
    115_200
}

fn default_timeout_ms() -> u64 {
    1000
}

fn default_run_threshold() -> f64 {
    DEFAULT_RUN_THRESHOLD
}

fn default_forward_key() -> String {
    "w".to_string()
}

fn default_modifier_key() -> String {
    "shift".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            baud_rate: default_baud_rate(),
            timeout_ms: default_timeout_ms(),
            max_attempts: None,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            run_threshold: default_run_threshold(),
        }
    }
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            forward: default_forward_key(),
            modifier: default_modifier_key(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Serialize to TOML text
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.serial.port.trim().is_empty() {
            return Err(Error::InvalidParameter("serial.port is empty".to_string()));
        }
        if self.serial.baud_rate == 0 {
            return Err(Error::InvalidParameter(
                "serial.baud_rate must be non-zero".to_string(),
            ));
        }
        if self.serial.timeout_ms == 0 {
            return Err(Error::InvalidParameter(
                "serial.timeout_ms must be non-zero".to_string(),
            ));
        }
        if self.serial.max_attempts == Some(0) {
            return Err(Error::InvalidParameter(
                "serial.max_attempts must be at least 1".to_string(),
            ));
        }

        let threshold = self.motion.run_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "motion.run_threshold must be a positive number, got {}",
                threshold
            )));
        }

        let forward: KeyCode = self.keys.forward.parse()?;
        let modifier: KeyCode = self.keys.modifier.parse()?;
        if forward == modifier {
            return Err(Error::InvalidParameter(format!(
                "keys.forward and keys.modifier are both {:?}",
                forward
            )));
        }

        Ok(())
    }
}
