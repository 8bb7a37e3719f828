//! Transport layer for I/O abstraction

use crate::error::Result;

mod mock;
mod serial;

pub use mock::MockTransport;
pub use serial::{SerialTransport, list_ports};

/// Byte source the sensor reader pulls from
pub trait Transport {
    /// Read data into buffer, returns number of bytes read
    ///
    /// A read that times out without data returns `Ok(0)`.
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize>;
}
