//! Mock transport for testing

use super::Transport;
use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory transport for driving the reader without hardware
///
/// Clones share the same buffer, so a test can keep a handle and inject
/// data while the reader owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[derive(Default)]
struct MockTransportInner {
    read_buffer: VecDeque<u8>,
    closed: bool,
}

impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject raw bytes to be read
    pub fn inject_read(&self, data: &[u8]) {
        self.lock().read_buffer.extend(data);
    }

    /// Inject one line, appending the newline terminator
    pub fn inject_line(&self, line: &str) {
        let mut inner = self.lock();
        inner.read_buffer.extend(line.as_bytes());
        inner.read_buffer.push_back(b'\n');
    }

    /// Simulate the device dropping off
    ///
    /// Reads fail with [`Error::Disconnected`] once buffered data runs out.
    pub fn close(&self) {
        self.lock().closed = true;
    }

    /// Number of bytes not yet consumed
    pub fn pending(&self) -> usize {
        self.lock().read_buffer.len()
    }

    fn lock(&self) -> MutexGuard<'_, MockTransportInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Transport for MockTransport {
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let mut inner = self.lock();
        if inner.read_buffer.is_empty() && inner.closed {
            return Err(Error::Disconnected);
        }

        let available = inner.read_buffer.len().min(buffer.len());
        for (slot, byte) in buffer.iter_mut().zip(inner.read_buffer.drain(..available)) {
            *slot = byte;
        }
        Ok(available)
    }
}
