//! Line parser for the sensor's JSON messages

use serde::Deserialize;
use serde_json::Number;
use std::fmt;

/// Wire message, one per line: `{"speed": <km/h>}`
///
/// Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct SpeedMessage {
    speed: Number,
}

/// One speed sample in km/h
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedReading {
    pub kmh: f64,
    /// Number as the sensor sent it (`5` stays `5`, `5.0` stays `5.0`)
    text: String,
}

impl SpeedReading {
    /// Reading from a bare value; whole numbers print with one decimal
    pub fn new(kmh: f64) -> Self {
        let text = if kmh.is_finite() && kmh.fract() == 0.0 {
            format!("{:.1}", kmh)
        } else {
            kmh.to_string()
        };
        Self { kmh, text }
    }

    fn from_number(number: &Number) -> Self {
        Self {
            kmh: number.as_f64().unwrap_or(f64::NAN),
            text: number.to_string(),
        }
    }
}

impl fmt::Display for SpeedReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Why a line was rejected
///
/// These are recovered locally: the reader logs the line and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    #[error("invalid message: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse one raw line
///
/// Surrounding whitespace (including a trailing `\r`) is ignored.
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(raw: &[u8]) -> Result<Option<SpeedReading>, ParseError> {
    let text = std::str::from_utf8(raw).map_err(|_| ParseError::InvalidUtf8)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let message: SpeedMessage = serde_json::from_str(text)?;
    Ok(Some(SpeedReading::from_number(&message.speed)))
}
