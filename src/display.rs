//! Console status output

use crate::error::Result;
use crate::motion::MotionAction;
use crate::sensor::SpeedReading;
use std::io::Write;

/// ANSI: clear screen, cursor home
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Prints one status line per sample
pub struct StatusDisplay {
    out: Box<dyn Write>,
    clear_screen: bool,
}

impl StatusDisplay {
    pub fn new(out: Box<dyn Write>, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    pub fn stdout(clear_screen: bool) -> Self {
        Self::new(Box::new(std::io::stdout()), clear_screen)
    }

    /// Discard all output
    pub fn silent() -> Self {
        Self::new(Box::new(std::io::sink()), false)
    }

    /// Show the latest reading and what was done with it
    pub fn show(&mut self, reading: SpeedReading, action: MotionAction) -> Result<()> {
        if self.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        writeln!(self.out, "{}", status_line(reading, action))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn farewell(&mut self) -> Result<()> {
        writeln!(self.out, "Exiting...")?;
        self.out.flush()?;
        Ok(())
    }
}

/// e.g. `Speed 30.5: Run!`
pub fn status_line(reading: SpeedReading, action: MotionAction) -> String {
    format!("Speed {}: {}", reading, action.message())
}
