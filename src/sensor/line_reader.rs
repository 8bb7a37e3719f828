//! Newline framing over a byte transport

use crate::error::Result;
use crate::transport::Transport;

/// Longest line kept while waiting for a terminator
///
/// Anything longer is dropped so a sensor spewing garbage without newlines
/// cannot grow the buffer without bound.
pub const MAX_LINE_LEN: usize = 4096;

const READ_CHUNK: usize = 256;

/// Splits a byte stream into `\n`-terminated lines
pub struct LineReader<T: Transport> {
    transport: T,
    buffer: Vec<u8>,
}

impl<T: Transport> LineReader<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            buffer: Vec::with_capacity(READ_CHUNK),
        }
    }

    /// Return the next complete line, without its terminator
    ///
    /// Does at most one transport read. `Ok(None)` means no full line is
    /// available yet (the read timed out or the line is still partial).
    pub fn next_line(&mut self) -> Result<Option<Vec<u8>>> {
        if let Some(line) = self.take_line() {
            return Ok(Some(line));
        }

        let mut chunk = [0u8; READ_CHUNK];
        let n = self.transport.read(&mut chunk)?;
        if n == 0 {
            return Ok(None);
        }
        self.buffer.extend_from_slice(&chunk[..n]);

        if let Some(line) = self.take_line() {
            return Ok(Some(line));
        }

        if self.buffer.len() > MAX_LINE_LEN {
            log::warn!(
                "Discarding {} bytes without a line terminator",
                self.buffer.len()
            );
            self.buffer.clear();
        }
        Ok(None)
    }

    /// Bytes buffered but not yet returned
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    fn take_line(&mut self) -> Option<Vec<u8>> {
        let pos = self.buffer.iter().position(|&b| b == b'\n')?;
        let mut line: Vec<u8> = self.buffer.drain(..=pos).collect();
        line.pop();
        Some(line)
    }
}
