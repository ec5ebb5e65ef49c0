//! Interactive mode.

mod input;
mod interactive;
mod text;

use std::process::ExitCode;

use zeroize::Zeroize;

use crate::cli::clipboard::{ClipboardSink, SystemClipboard};
use crate::cli::{generate_batch, prompts};
use crate::settings::Settings;
use crate::terminal::print_results;

pub use input::Console;
pub use interactive::Session;
pub use text::*;

/// Run interactive mode.
pub fn run() -> ExitCode {
    print_banner();

    let mut session = Session::new(Console::new(), Settings::load_or_default());
    let Some(settings) = session.ask() else {
        println!("  Cancelled.");
        return ExitCode::SUCCESS;
    };

    let mut secrets = match generate_batch(&settings) {
        Ok(secrets) => secrets,
        Err(e) => {
            prompts::error(&format!("  error: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let shown: Vec<&str> = secrets.iter().map(|s| s.as_str()).collect();
    print_results(&shown);

    if settings.copy
        && let Some(last) = secrets.last()
    {
        match SystemClipboard.copy(last) {
            Ok(()) if secrets.len() == 1 => println!("  Copied to clipboard!"),
            Ok(()) => println!("  Password #{} copied to clipboard!", secrets.len()),
            Err(e) => eprintln!("  (clipboard unavailable: {e})"),
        }
    }
    secrets.zeroize();
    println!();

    if session.ask_save() == Some(true) {
        match settings.save_to_file() {
            Ok(()) => println!("  Saved to {}", Settings::path().display()),
            Err(e) => prompts::error(&format!("  Failed to save settings: {e}")),
        }
        println!();
    }

    ExitCode::SUCCESS
}
