//! Three-band speed classifier
//!
//! Pure decision logic: no key signals are sent from here, so the bands can
//! be tested without a keyboard backend.

use crate::config::MotionConfig;
use std::fmt;

/// Default run threshold in km/h
pub const DEFAULT_RUN_THRESHOLD: f64 = 25.0;

/// Movement selected for one speed sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionAction {
    /// `0 < speed <= threshold`
    Walk,
    /// `speed > threshold`
    Run,
    /// `speed <= 0` (and NaN)
    Stop,
}

/// Desired state of both keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyPlan {
    pub forward: bool,
    pub modifier: bool,
}

impl MotionAction {
    /// Keys that should be down for this action
    pub fn key_plan(self) -> KeyPlan {
        match self {
            Self::Walk => KeyPlan {
                forward: true,
                modifier: false,
            },
            Self::Run => KeyPlan {
                forward: true,
                modifier: true,
            },
            Self::Stop => KeyPlan::default(),
        }
    }

    /// Human-readable status suffix
    pub fn message(self) -> &'static str {
        match self {
            Self::Walk => "Move forward!",
            Self::Run => "Run!",
            Self::Stop => "Stop moving.",
        }
    }
}

impl fmt::Display for MotionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Walk => write!(f, "walk"),
            Self::Run => write!(f, "run"),
            Self::Stop => write!(f, "stop"),
        }
    }
}

/// Classify a speed (km/h) against a run threshold
pub fn classify(speed: f64, run_threshold: f64) -> MotionAction {
    if speed > 0.0 && speed <= run_threshold {
        MotionAction::Walk
    } else if speed > run_threshold {
        MotionAction::Run
    } else {
        MotionAction::Stop
    }
}

/// Classifier bound to a configured threshold
#[derive(Debug, Clone, Copy)]
pub struct MotionClassifier {
    run_threshold: f64,
}

impl MotionClassifier {
    pub fn new(run_threshold: f64) -> Self {
        Self { run_threshold }
    }

    pub fn from_config(config: &MotionConfig) -> Self {
        Self::new(config.run_threshold)
    }

    pub fn run_threshold(&self) -> f64 {
        self.run_threshold
    }

    pub fn classify(&self, speed: f64) -> MotionAction {
        classify(speed, self.run_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_band() {
        let classifier = MotionClassifier::new(DEFAULT_RUN_THRESHOLD);
        for speed in [0.001, 1.0, 5.0, 12.5, 24.999, 25.0] {
            assert_eq!(classifier.classify(speed), MotionAction::Walk, "{}", speed);
        }
    }

    #[test]
    fn test_run_band() {
        let classifier = MotionClassifier::new(DEFAULT_RUN_THRESHOLD);
        for speed in [25.0001, 26.0, 30.0, 120.0, f64::INFINITY] {
            assert_eq!(classifier.classify(speed), MotionAction::Run, "{}", speed);
        }
    }

    #[test]
    fn test_stop_band() {
        let classifier = MotionClassifier::new(DEFAULT_RUN_THRESHOLD);
        for speed in [0.0, -0.0, -0.5, -30.0, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(classifier.classify(speed), MotionAction::Stop, "{}", speed);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(25.0, 25.0), MotionAction::Walk);
        assert_eq!(classify(25.0001, 25.0), MotionAction::Run);
        assert_eq!(classify(0.0, 25.0), MotionAction::Stop);
    }

    #[test]
    fn test_custom_threshold() {
        let classifier = MotionClassifier::new(10.0);
        assert_eq!(classifier.classify(10.0), MotionAction::Walk);
        assert_eq!(classifier.classify(10.5), MotionAction::Run);
        assert_eq!(classifier.run_threshold(), 10.0);
    }

    #[test]
    fn test_key_plans() {
        assert_eq!(
            MotionAction::Walk.key_plan(),
            KeyPlan {
                forward: true,
                modifier: false
            }
        );
        assert_eq!(
            MotionAction::Run.key_plan(),
            KeyPlan {
                forward: true,
                modifier: true
            }
        );
        assert_eq!(MotionAction::Stop.key_plan(), KeyPlan::default());
    }
}
