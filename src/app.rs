//! Driver loop
//!
//! Read a sample, classify it, press the keys, print the status; repeat until
//! interrupted. Keys are released on every way out of [`App::run`].

use crate::config::Config;
use crate::controller::KeyController;
use crate::display::StatusDisplay;
use crate::error::{Error, Result};
use crate::keyboard::VirtualKeyboard;
use crate::motion::{MotionAction, MotionClassifier};
use crate::sensor::SpeedSource;
use crate::transport::Transport;
use log::{error, info, warn};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Main application structure tying the pipeline together
pub struct App<T: Transport, K: VirtualKeyboard> {
    source: SpeedSource<T>,
    classifier: MotionClassifier,
    controller: KeyController<K>,
    display: StatusDisplay,
}

impl<T: Transport, K: VirtualKeyboard> App<T, K> {
    pub fn new(
        source: SpeedSource<T>,
        classifier: MotionClassifier,
        controller: KeyController<K>,
        display: StatusDisplay,
    ) -> Self {
        Self {
            source,
            classifier,
            controller,
            display,
        }
    }

    /// Assemble the pipeline from configuration
    pub fn from_config(
        config: &Config,
        transport: T,
        keyboard: K,
        display: StatusDisplay,
        running: Arc<AtomicBool>,
    ) -> Self {
        let source =
            SpeedSource::new(transport, running).with_max_attempts(config.serial.max_attempts);
        Self::new(
            source,
            MotionClassifier::from_config(&config.motion),
            KeyController::new(keyboard),
            display,
        )
    }

    /// One iteration: acquire, classify, act, report
    pub fn step(&mut self) -> Result<MotionAction> {
        let reading = self.source.read_speed()?;
        let action = self.classifier.classify(reading.kmh);
        self.controller.apply(action)?;
        self.display.show(reading, action)?;
        Ok(action)
    }

    /// Loop until interrupted or a fatal error
    ///
    /// Returns the number of samples processed. An interrupt is a clean
    /// exit; any other error is returned after the keys are released.
    pub fn run(&mut self) -> Result<u64> {
        info!(
            "Running (run threshold {} km/h). Press Ctrl-C to stop.",
            self.classifier.run_threshold()
        );

        let mut samples = 0u64;
        let outcome = loop {
            match self.step() {
                Ok(_) => samples += 1,
                Err(Error::Interrupted) => break Ok(samples),
                Err(e) => break Err(e),
            }
        };

        let released = self.controller.release_all();
        match outcome {
            Ok(samples) => {
                self.display.farewell()?;
                released?;
                info!("Stopped after {} samples", samples);
                Ok(samples)
            }
            Err(e) => {
                if let Err(release_err) = released {
                    warn!("Failed to release keys: {}", release_err);
                }
                error!("Stopping: {}", e);
                Err(e)
            }
        }
    }

    pub fn controller(&self) -> &KeyController<K> {
        &self.controller
    }
}
