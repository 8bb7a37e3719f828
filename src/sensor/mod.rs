//! Speed acquisition from the serial sensor
//!
//! The sensor sends one JSON object per line, e.g. `{"speed": 12.4}`, with
//! the speed in km/h. [`SpeedSource`] pulls lines off a [`Transport`],
//! skips anything it cannot parse and hands back the first valid reading.
//!
//! [`Transport`]: crate::transport::Transport

mod line_reader;
mod parser;
mod source;

pub use line_reader::{LineReader, MAX_LINE_LEN};
pub use parser::{ParseError, SpeedReading, parse_line};
pub use source::SpeedSource;
