use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod cli;
mod exits;
mod settings;
mod terminal;
mod tui;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PASSGEN_LOG";

/// Diagnostics go to stderr and are off unless asked for.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// True when `--verbose` is given in any accepted spelling, including `=true`.
fn wants_verbose(args: &[String]) -> bool {
    args.iter().skip(1).any(|arg| {
        let Some(name) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
            return false;
        };
        match name.split_once('=') {
            Some((name, value)) => name == "verbose" && value == "true",
            None => name == "verbose",
        }
    })
}

fn main() -> ExitCode {
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();
    init_tracing(wants_verbose(&args));
    exits::disable_core_dumps();
    tracing::debug!(source = passgen::rand::source_name(), "starting");

    match args.len() {
        1 => tui::run(),
        _ => cli::run(&args),
    }
}
