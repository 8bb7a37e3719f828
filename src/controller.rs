//! Key controller
//!
//! Applies a [`MotionAction`] to the keyboard and owns the key-down state.
//! Held keys are released by [`KeyController::release_all`] and again on
//! drop, so no exit path leaves a key stuck down.

use crate::error::Result;
use crate::keyboard::{VirtualKey, VirtualKeyboard};
use crate::motion::{KeyPlan, MotionAction};

/// Drives the forward and modifier keys from motion actions
pub struct KeyController<K: VirtualKeyboard> {
    keyboard: K,
    /// Keys we may have put down (set before the press is attempted)
    held: KeyPlan,
}

impl<K: VirtualKeyboard> KeyController<K> {
    pub fn new(keyboard: K) -> Self {
        Self {
            keyboard,
            held: KeyPlan::default(),
        }
    }

    /// Emit the press/release pair for `action`
    ///
    /// Both keys are signalled every call, forward first.
    pub fn apply(&mut self, action: MotionAction) -> Result<()> {
        let plan = action.key_plan();
        self.set_key(VirtualKey::Forward, plan.forward)?;
        self.set_key(VirtualKey::Modifier, plan.modifier)?;
        log::debug!("Applied {} (forward={}, modifier={})", action, plan.forward, plan.modifier);
        Ok(())
    }

    /// Release both keys
    ///
    /// Attempts both releases even if the first fails; returns the first error.
    pub fn release_all(&mut self) -> Result<()> {
        let forward = self.set_key(VirtualKey::Forward, false);
        let modifier = self.set_key(VirtualKey::Modifier, false);
        forward.and(modifier)
    }

    /// Keys currently believed to be down
    pub fn held(&self) -> KeyPlan {
        self.held
    }

    fn set_key(&mut self, key: VirtualKey, down: bool) -> Result<()> {
        if down {
            self.mark(key, true);
            self.keyboard.press(key)
        } else {
            self.keyboard.release(key)?;
            self.mark(key, false);
            Ok(())
        }
    }

    fn mark(&mut self, key: VirtualKey, down: bool) {
        match key {
            VirtualKey::Forward => self.held.forward = down,
            VirtualKey::Modifier => self.held.modifier = down,
        }
    }
}

impl<K: VirtualKeyboard> Drop for KeyController<K> {
    fn drop(&mut self) {
        if self.held == KeyPlan::default() {
            return;
        }
        if let Err(e) = self.release_all() {
            log::warn!("Failed to release keys on shutdown: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{KeyEvent, RecordingKeyboard};

    #[test]
    fn test_walk_run_stop_sequence() {
        let keyboard = RecordingKeyboard::new();
        let mut controller = KeyController::new(keyboard.clone());

        controller.apply(MotionAction::Walk).unwrap();
        assert!(keyboard.is_down(VirtualKey::Forward));
        assert!(!keyboard.is_down(VirtualKey::Modifier));

        controller.apply(MotionAction::Run).unwrap();
        assert!(keyboard.is_down(VirtualKey::Forward));
        assert!(keyboard.is_down(VirtualKey::Modifier));

        controller.apply(MotionAction::Stop).unwrap();
        assert!(keyboard.all_released());
        assert_eq!(controller.held(), KeyPlan::default());
    }

    #[test]
    fn test_emits_pair_in_order() {
        let keyboard = RecordingKeyboard::new();
        let mut controller = KeyController::new(keyboard.clone());

        controller.apply(MotionAction::Walk).unwrap();
        assert_eq!(
            keyboard.events(),
            vec![
                KeyEvent::Press(VirtualKey::Forward),
                KeyEvent::Release(VirtualKey::Modifier)
            ]
        );
    }

    #[test]
    fn test_drop_releases_held_keys() {
        let keyboard = RecordingKeyboard::new();
        {
            let mut controller = KeyController::new(keyboard.clone());
            controller.apply(MotionAction::Run).unwrap();
            assert!(!keyboard.all_released());
        }
        assert!(keyboard.all_released());
    }

    #[test]
    fn test_drop_after_release_is_quiet() {
        let keyboard = RecordingKeyboard::new();
        {
            let mut controller = KeyController::new(keyboard.clone());
            controller.apply(MotionAction::Walk).unwrap();
            controller.release_all().unwrap();
            keyboard.clear_events();
        }
        assert!(keyboard.events().is_empty());
    }

    #[test]
    fn test_failed_press_still_cleaned_up() {
        let keyboard = RecordingKeyboard::new();
        let mut controller = KeyController::new(keyboard.clone());

        controller.apply(MotionAction::Walk).unwrap();
        keyboard.fail_presses(true);
        assert!(controller.apply(MotionAction::Run).is_err());
        assert!(controller.held().forward);

        drop(controller);
        assert!(keyboard.all_released());
    }
}
