//! Process-wide `--quiet` switch and TTY detection.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings and confirmations, never errors or secrets.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether answers can be edited in place, i.e. stdin is a terminal.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}
