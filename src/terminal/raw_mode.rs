//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Guard that restores cooked mode on drop, unless raw mode was already on.
pub struct RawModeGuard {
    enabled_here: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        if is_raw_mode_enabled()? {
            return Ok(Self {
                enabled_here: false,
            });
        }
        enable_raw_mode()?;
        Ok(Self { enabled_here: true })
    }

    /// Manually disable raw mode (also happens on drop).
    pub fn disable(&mut self) {
        if self.enabled_here {
            let _ = disable_raw_mode();
            self.enabled_here = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
