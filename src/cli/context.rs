//! CLI context - bundles settings, flags, and the clipboard sink.

use passgen::{SegmentConfig, Separator};
use zeroize::Zeroize;

use super::clipboard::{ClipboardSink, SystemClipboard};
use super::{
    CliFlags, ParseError, excluded_separator, generate_batch, invalid_setting, prompts, quiet,
};
use crate::settings::{Kind, Settings};
use crate::tui::print_help;

/// Why a run stopped before finishing.
#[derive(Debug, PartialEq, Eq)]
pub enum Halt {
    /// Early exit - not an error, just done.
    Done,
    /// Reported to the user; exit with failure.
    Failed,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: Box<dyn ClipboardSink>,
}

impl Context {
    /// Parse arguments and layer them over the saved settings.
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);
        tracing::debug!(
            quick = flags.quick.is_some(),
            verbose = flags.verbose,
            save = flags.save,
            reset = flags.reset,
            "parsed flags"
        );
        let settings = if flags.reset || flags.quick.is_some() {
            Settings::default()
        } else {
            Settings::load_or_default()
        };
        Ok(Self::from_parts(flags, settings, Box::new(SystemClipboard)))
    }

    pub fn from_parts(
        flags: CliFlags,
        settings: Settings,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Self {
            settings,
            flags,
            clipboard,
        }
    }

    /// Run CLI. Returns `Err(Halt::Done)` for early exits.
    pub fn run(&mut self) -> Result<(), Halt> {
        quiet::set(self.flags.quiet);
        self.handle_info_flags()?;
        self.handle_reset()?;
        self.apply_flags();
        self.validate()?;
        self.handle_save();
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Halt> {
        if self.flags.help {
            print_help();
            return Err(Halt::Done);
        }
        if self.flags.version {
            println!(
                "passgen {} (entropy: {})",
                env!("CARGO_PKG_VERSION"),
                passgen::rand::source_name()
            );
            return Err(Halt::Done);
        }
        Ok(())
    }

    fn handle_reset(&mut self) -> Result<(), Halt> {
        if !self.flags.reset {
            return Ok(());
        }
        let path = Settings::path();
        if let Err(e) = Settings::default().save_to_file() {
            prompts::error(&format!("error: failed to reset settings: {e}"));
            return Err(Halt::Failed);
        }
        prompts::settings_reset(&path.display().to_string());
        if self.flags.has_generation_args() || self.flags.save {
            Ok(())
        } else {
            Err(Halt::Done)
        }
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        let flags = &self.flags;
        let settings = &mut self.settings;

        if let Some(separator) = flags.quick {
            *settings = quick_settings(separator);
        }

        if let Some(kind) = flags.kind {
            settings.kind = kind;
        }
        if let Some(length) = flags.length {
            settings.length = length;
        }
        if let Some(count) = flags.count {
            settings.count = count;
        }

        // An explicit `=false` switches a saved class back on
        if let Some(no_upper) = flags.no_upper {
            settings.upper = !no_upper;
        }
        if let Some(no_lower) = flags.no_lower {
            settings.lower = !no_lower;
        }
        if let Some(no_digits) = flags.no_digits {
            settings.digits = !no_digits;
        }
        if let Some(no_symbols) = flags.no_symbols {
            settings.symbols = !no_symbols;
        }
        if let Some(ref exclude) = flags.exclude {
            settings.exclude = exclude.clone();
        }

        if let Some(segments) = flags.segments {
            settings.segments = segments;
        }
        if let Some(seg_length) = flags.seg_length {
            settings.seg_length = seg_length;
        }
        if let Some(separator) = flags.separator {
            settings.separator = separator;
        }

        if let Some(words) = flags.words {
            settings.words = words;
        }
        if let Some(capitalize) = flags.capitalize {
            settings.capitalize = capitalize;
        }
        if let Some(add_number) = flags.add_number {
            settings.add_number = add_number;
        }
        if !flags.include.is_empty() {
            settings.include = flags.include.clone();
        }

        if let Some(no_copy) = flags.no_copy {
            settings.copy = !no_copy;
        }
    }

    fn validate(&self) -> Result<(), Halt> {
        if let Some(flag) = invalid_setting(&self.settings) {
            prompts::error(&format!("error: --{flag} must be >= 1"));
            return Err(Halt::Failed);
        }
        if let Some(separator) = excluded_separator(&self.settings) {
            prompts::error(&format!(
                "error: separator '{separator}' is excluded by --exclude; pick the other separator"
            ));
            return Err(Halt::Failed);
        }
        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(&Settings::path().display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    /// Generate secrets, print them in order and copy the last one.
    pub fn generate_output(&mut self) -> Result<(), Halt> {
        let mut secrets = match generate_batch(&self.settings) {
            Ok(secrets) => secrets,
            Err(e) => {
                prompts::error(&format!("error: {e}"));
                return Err(Halt::Failed);
            }
        };

        {
            use std::io::Write;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for secret in &secrets {
                let _ = writeln!(out, "{}", secret.as_str());
            }
            let _ = out.flush();
        }

        if self.settings.copy
            && let Some(last) = secrets.last()
        {
            match self.clipboard.copy(last) {
                Ok(()) => prompts::clipboard_copied(secrets.len()),
                Err(e) => prompts::clipboard_unavailable(&e.to_string()),
            }
        }

        secrets.zeroize();
        Ok(())
    }
}

/// `passgen -` / `passgen _`: five segments of five, every class.
fn quick_settings(separator: Separator) -> Settings {
    let quick = SegmentConfig::quick(separator);
    Settings {
        kind: Kind::Segment,
        count: 1,
        segments: quick.segments,
        seg_length: quick.seg_length,
        separator,
        ..Settings::default()
    }
}
