//! OS keyboard backend built on enigo

use super::{KeyBindings, KeyCode, VirtualKey, VirtualKeyboard};
use crate::error::Result;
use enigo::{Direction, Enigo, Key, Keyboard, Settings};

/// Sends synthetic key events to whichever window has focus
pub struct EnigoKeyboard {
    enigo: Enigo,
    bindings: KeyBindings,
}

impl EnigoKeyboard {
    /// Connect to the platform input system
    pub fn new(bindings: KeyBindings) -> Result<Self> {
        let enigo = Enigo::new(&Settings::default())?;
        log::info!(
            "Keyboard ready: forward={:?}, modifier={:?}",
            bindings.forward,
            bindings.modifier
        );
        Ok(Self { enigo, bindings })
    }

    fn send(&mut self, key: VirtualKey, direction: Direction) -> Result<()> {
        let code = to_enigo(self.bindings.code(key));
        self.enigo.key(code, direction)?;
        Ok(())
    }
}

fn to_enigo(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::Unicode(c),
        KeyCode::Shift => Key::Shift,
        KeyCode::Control => Key::Control,
        KeyCode::Alt => Key::Alt,
        KeyCode::Space => Key::Space,
    }
}

impl VirtualKeyboard for EnigoKeyboard {
    fn press(&mut self, key: VirtualKey) -> Result<()> {
        self.send(key, Direction::Press)
    }

    fn release(&mut self, key: VirtualKey) -> Result<()> {
        self.send(key, Direction::Release)
    }
}
