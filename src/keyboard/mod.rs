//! Virtual keyboard output
//!
//! The controller talks to a [`VirtualKeyboard`], which knows only the two
//! logical keys it drives. The OS-backed implementation maps them to real
//! key codes; [`RecordingKeyboard`] keeps a log for tests.

mod host;
mod recording;

pub use host::EnigoKeyboard;
pub use recording::{KeyEvent, RecordingKeyboard};

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Logical keys driven by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualKey {
    /// Move forward (default "w")
    Forward,
    /// Run modifier (default shift)
    Modifier,
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Modifier => write!(f, "modifier"),
        }
    }
}

/// Keyboard backend trait
pub trait VirtualKeyboard {
    /// Put the key down
    fn press(&mut self, key: VirtualKey) -> Result<()>;

    /// Let the key up
    fn release(&mut self, key: VirtualKey) -> Result<()>;
}

/// Physical key a logical key is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// Printable character, stored lowercase for letters
    Char(char),
    Shift,
    Control,
    Alt,
    Space,
}

impl FromStr for KeyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        match name.to_ascii_lowercase().as_str() {
            "shift" => return Ok(Self::Shift),
            "ctrl" | "control" => return Ok(Self::Control),
            "alt" => return Ok(Self::Alt),
            "space" => return Ok(Self::Space),
            _ => {}
        }

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() && !c.is_control() => {
                Ok(Self::Char(c.to_ascii_lowercase()))
            }
            _ => Err(Error::InvalidParameter(format!("Unknown key name: {:?}", s))),
        }
    }
}

/// Physical bindings for both logical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub modifier: KeyCode,
}

impl KeyBindings {
    /// Resolve bindings from config key names
    pub fn from_config(keys: &crate::config::KeysConfig) -> Result<Self> {
        Ok(Self {
            forward: keys.forward.parse()?,
            modifier: keys.modifier.parse()?,
        })
    }

    /// Physical key for a logical key
    pub fn code(&self, key: VirtualKey) -> KeyCode {
        match key {
            VirtualKey::Forward => self.forward,
            VirtualKey::Modifier => self.modifier,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::Char('w'),
            modifier: KeyCode::Shift,
        }
    }
}
