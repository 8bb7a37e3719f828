//! Speed to movement classification

mod classifier;

pub use classifier::{DEFAULT_RUN_THRESHOLD, KeyPlan, MotionAction, MotionClassifier, classify};
