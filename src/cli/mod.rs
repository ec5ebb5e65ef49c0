//! Flag mode: parse arguments, generate, print, copy.

mod batch;
pub mod clipboard;
mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

pub use batch::{excluded_separator, generate_batch, invalid_setting};
pub use context::{Context, Halt};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Entry point for flag mode.
pub fn run(args: &[String]) -> ExitCode {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&format!("error: {e}"));
            prompts::usage_hint();
            return ExitCode::from(2);
        }
    };

    match ctx.run() {
        Ok(()) | Err(Halt::Done) => ExitCode::SUCCESS,
        Err(Halt::Failed) => ExitCode::FAILURE,
    }
}
