//! Recording keyboard for testing

use super::{VirtualKey, VirtualKeyboard};
use crate::error::{Error, Result};
use std::sync::{Arc, Mutex, MutexGuard};

/// One emitted key signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Press(VirtualKey),
    Release(VirtualKey),
}

/// Keyboard that records events instead of sending them
///
/// Clones share state, so a test can hand one to the controller and inspect
/// the other.
#[derive(Clone, Default)]
pub struct RecordingKeyboard {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Default)]
struct RecordingInner {
    events: Vec<KeyEvent>,
    forward_down: bool,
    modifier_down: bool,
    fail_presses: bool,
}

impl RecordingKeyboard {
    /// Create a keyboard with both keys up
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the key is currently down
    pub fn is_down(&self, key: VirtualKey) -> bool {
        let inner = self.lock();
        match key {
            VirtualKey::Forward => inner.forward_down,
            VirtualKey::Modifier => inner.modifier_down,
        }
    }

    /// Whether both keys are up
    pub fn all_released(&self) -> bool {
        !self.is_down(VirtualKey::Forward) && !self.is_down(VirtualKey::Modifier)
    }

    /// Every event seen so far
    pub fn events(&self) -> Vec<KeyEvent> {
        self.lock().events.clone()
    }

    /// Clear the event log (key state is kept)
    pub fn clear_events(&self) {
        self.lock().events.clear();
    }

    /// Make subsequent presses fail, to exercise error paths
    pub fn fail_presses(&self, fail: bool) {
        self.lock().fail_presses = fail;
    }

    fn lock(&self) -> MutexGuard<'_, RecordingInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn set(&self, key: VirtualKey, down: bool) {
        let mut inner = self.lock();
        match key {
            VirtualKey::Forward => inner.forward_down = down,
            VirtualKey::Modifier => inner.modifier_down = down,
        }
        let event = if down {
            KeyEvent::Press(key)
        } else {
            KeyEvent::Release(key)
        };
        inner.events.push(event);
    }
}

impl VirtualKeyboard for RecordingKeyboard {
    fn press(&mut self, key: VirtualKey) -> Result<()> {
        if self.lock().fail_presses {
            return Err(Error::Keyboard(format!("press {} rejected", key)));
        }
        self.set(key, true);
        Ok(())
    }

    fn release(&mut self, key: VirtualKey) -> Result<()> {
        self.set(key, false);
        Ok(())
    }
}
