//! Centralized warning and status messages for CLI output.

use std::io::IsTerminal;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Color only when stderr is a terminal.
fn paint(color: &str, msg: &str) -> String {
    if std::io::stderr().is_terminal() {
        format!("{color}{msg}{RESET}")
    } else {
        msg.to_string()
    }
}

/// Yellow on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", paint(YELLOW, msg));
    }
}

/// Red on stderr. Errors are always shown.
pub fn error(msg: &str) {
    eprintln!("{}", paint(RED, msg));
}

pub fn usage_hint() {
    eprintln!("Run 'passgen --help' for usage.");
}

/// Confirmation after copying the last of `count` secrets.
pub fn clipboard_copied(count: usize) {
    if quiet::enabled() {
        return;
    }
    if count == 1 {
        eprintln!("Copied to clipboard.");
    } else {
        eprintln!("Password #{count} copied to clipboard.");
    }
}

/// Clipboard failure never fails the run, so it is reported but not red.
pub fn clipboard_unavailable(reason: &str) {
    if !quiet::enabled() {
        eprintln!("(clipboard unavailable: {reason})");
    }
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved to {path}");
    }
}

pub fn settings_reset(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings reset to defaults in {path}");
    }
}
