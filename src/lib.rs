//! speed-keys - turn a serial speed sensor into walk/run key presses
//!
//! A treadmill or bike sensor sends `{"speed": <km/h>}` lines over a
//! Bluetooth serial link. Each sample is classified into one of three bands
//! and the forward/modifier keys are pressed or released to match:
//!
//! | speed (km/h)       | action | forward | modifier |
//! |--------------------|--------|---------|----------|
//! | `0 < s <= 25`      | walk   | down    | up       |
//! | `s > 25`           | run    | down    | down     |
//! | `s <= 0`           | stop   | up      | up       |

pub mod app;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod keyboard;
pub mod motion;
pub mod sensor;
pub mod signal;
pub mod transport;

// Re-export commonly used types
pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use motion::{MotionAction, MotionClassifier};
