//! Clipboard sink: platform utilities first, native clipboard second.

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("{0}")]
    Unavailable(String),
}

pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

struct Utility {
    program: &'static str,
    args: &'static [&'static str],
}

/// Probe order. Utilities outlive the process, so they are preferred over
/// the native X11 clipboard, which is cleared when its owner exits.
const UTILITIES: &[Utility] = &[
    Utility {
        program: "pbcopy",
        args: &[],
    },
    Utility {
        program: "wl-copy",
        args: &[],
    },
    Utility {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    Utility {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
    Utility {
        program: "clip",
        args: &[],
    },
];

#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut failures = Vec::new();

        for utility in UTILITIES {
            let Some(path) = find_program(utility.program) else {
                continue;
            };
            match pipe_into(&path, utility.args, text) {
                Ok(()) => {
                    tracing::debug!(utility = utility.program, "copied via utility");
                    return Ok(());
                }
                Err(e) => {
                    tracing::debug!(utility = utility.program, error = %e, "utility failed");
                    failures.push(format!("{}: {e}", utility.program));
                }
            }
        }

        match copy_native(text) {
            Ok(()) => {
                tracing::debug!("copied via native clipboard");
                Ok(())
            }
            Err(e) if failures.is_empty() => Err(ClipboardError::Unavailable(format!(
                "no clipboard utility found (pbcopy / wl-copy / xclip / xsel / clip), native clipboard: {e}"
            ))),
            Err(e) => {
                failures.push(format!("native: {e}"));
                Err(ClipboardError::Unavailable(failures.join("; ")))
            }
        }
    }
}

fn copy_native(text: &str) -> Result<(), String> {
    let mut ctx = ClipboardContext::new().map_err(|e| e.to_string())?;
    ctx.set_contents(text.to_owned()).map_err(|e| e.to_string())
}

fn pipe_into(path: &Path, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(path)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // stdin is dropped before waiting so the utility sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    // Reap the child even when the write failed
    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("exited with {status}")))
    }
}

/// Locate `name` on `PATH`.
fn find_program(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths).find_map(|dir| {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        let exe = candidate.with_extension("exe");
        exe.is_file().then_some(exe)
    })
}
