//! Blocking speed acquisition

use super::line_reader::LineReader;
use super::parser::{SpeedReading, parse_line};
use crate::error::{Error, Result};
use crate::transport::Transport;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Pulls speed readings off an open transport
///
/// The transport is opened once by the caller and owned here for the whole
/// run.
pub struct SpeedSource<T: Transport> {
    reader: LineReader<T>,
    max_attempts: Option<u32>,
    running: Arc<AtomicBool>,
}

impl<T: Transport> SpeedSource<T> {
    /// Wrap a transport
    ///
    /// `running` is polled between reads; once it goes false,
    /// [`read_speed`](Self::read_speed) returns [`Error::Interrupted`].
    pub fn new(transport: T, running: Arc<AtomicBool>) -> Self {
        Self {
            reader: LineReader::new(transport),
            max_attempts: None,
            running,
        }
    }

    /// Fail after this many rejected lines in a single call
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Block until one valid reading arrives
    ///
    /// Blank lines are skipped silently. Malformed lines are logged and
    /// skipped. Transport failures propagate.
    pub fn read_speed(&mut self) -> Result<SpeedReading> {
        let mut rejected = 0u32;

        loop {
            if !self.running.load(Ordering::Relaxed) {
                return Err(Error::Interrupted);
            }

            let Some(raw) = self.reader.next_line()? else {
                continue;
            };

            match parse_line(&raw) {
                Ok(Some(reading)) => {
                    log::debug!("Speed reading: {} km/h", reading.kmh);
                    return Ok(reading);
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Raw line: {} ({})", String::from_utf8_lossy(&raw).trim(), e);
                    rejected += 1;
                    if let Some(max) = self.max_attempts
                        && rejected >= max
                    {
                        return Err(Error::NoValidReading { attempts: rejected });
                    }
                }
            }
        }
    }
}
