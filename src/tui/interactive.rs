//! The question-and-answer session run when passgen starts without flags.

use passgen::{Exclusion, Separator};

use super::input::{LineSource, ask_choice, ask_default, ask_int, ask_yes_no};
use crate::settings::{Kind, Settings, split_words};

const TYPES: &[&str] = &["1", "2", "3"];
const SEPARATORS: &[&str] = &["-", "_"];

/// Free-text answer meaning "nothing".
const NONE: &str = "none";

pub struct Session<L: LineSource> {
    input: L,
    defaults: Settings,
}

impl<L: LineSource> Session<L> {
    /// Every prompt offers the matching field of `defaults` as its default.
    pub fn new(input: L, defaults: Settings) -> Self {
        Self { input, defaults }
    }

    /// Ask for a full set of options. `None` if the user cancelled.
    pub fn ask(&mut self) -> Option<Settings> {
        let mut settings = self.defaults.clone();

        println!("  Password type:");
        println!("    1  Random     e.g. X7&kP2!qL9mR@wZ");
        println!("    2  Segmented  e.g. ab12-cd34-ef56");
        println!("    3  Passphrase e.g. maple-tiger-vocal-brisk");
        println!();
        let default_type = match settings.kind {
            Kind::Random => "1",
            Kind::Segment => "2",
            Kind::Passphrase => "3",
        };
        settings.kind = match ask_choice(&mut self.input, "  Choose type", TYPES, default_type)? {
            "2" => Kind::Segment,
            "3" => Kind::Passphrase,
            _ => Kind::Random,
        };
        println!();

        settings.count = ask_int(
            &mut self.input,
            "  How many passwords to generate",
            settings.count,
        )?;
        println!();

        match settings.kind {
            Kind::Random => self.random_options(&mut settings)?,
            Kind::Segment => self.segment_options(&mut settings)?,
            Kind::Passphrase => self.passphrase_options(&mut settings)?,
        }
        println!();

        settings.copy = ask_yes_no(&mut self.input, "  Copy to clipboard", settings.copy)?;
        println!();
        Some(settings)
    }

    /// Asked after the results are shown.
    pub fn ask_save(&mut self) -> Option<bool> {
        ask_yes_no(&mut self.input, "  Save these answers as defaults", false)
    }

    fn random_options(&mut self, s: &mut Settings) -> Option<()> {
        println!("  Random password options");
        s.length = ask_int(&mut self.input, "  Length", s.length)?;
        s.upper = ask_yes_no(&mut self.input, "  Include uppercase  (A-Z)", s.upper)?;
        s.lower = ask_yes_no(&mut self.input, "  Include lowercase  (a-z)", s.lower)?;
        s.digits = ask_yes_no(&mut self.input, "  Include digits     (0-9)", s.digits)?;
        s.symbols = ask_yes_no(&mut self.input, "  Include symbols    (!@#$...)", s.symbols)?;
        s.exclude = self.exclusions(&s.exclude)?;
        Some(())
    }

    fn segment_options(&mut self, s: &mut Settings) -> Option<()> {
        println!("  Segmented password options");
        s.segments = ask_int(&mut self.input, "  Number of segments", s.segments)?;
        s.seg_length = ask_int(&mut self.input, "  Characters per segment", s.seg_length)?;
        s.separator = self.separator(s.separator)?;
        println!();
        s.upper = ask_yes_no(&mut self.input, "  Include uppercase  (A-Z)", s.upper)?;
        s.lower = ask_yes_no(&mut self.input, "  Include lowercase  (a-z)", s.lower)?;
        s.digits = ask_yes_no(&mut self.input, "  Include digits     (0-9)", s.digits)?;
        s.exclude = self.exclusions_keeping(&s.exclude, s.separator)?;
        Some(())
    }

    fn passphrase_options(&mut self, s: &mut Settings) -> Option<()> {
        println!("  Passphrase options");
        s.words = ask_int(&mut self.input, "  Number of words", s.words)?;
        s.separator = self.separator(s.separator)?;
        s.capitalize = ask_yes_no(&mut self.input, "  Capitalize words", s.capitalize)?;
        s.add_number = ask_yes_no(&mut self.input, "  Add a number", s.add_number)?;

        let current = s.include.join(",");
        let raw = ask_default(
            &mut self.input,
            "  Words to include (comma separated, none to clear)",
            &current,
        )?;
        s.include = split_words(&cleared(raw));

        s.exclude = self.exclusions_keeping(&s.exclude, s.separator)?;
        Some(())
    }

    fn separator(&mut self, current: Separator) -> Option<Separator> {
        let choice = ask_choice(
            &mut self.input,
            "  Separator  (- or _)",
            SEPARATORS,
            current.as_str(),
        )?;
        Some(if choice == "_" {
            Separator::Underscore
        } else {
            Separator::Dash
        })
    }

    fn exclusions(&mut self, current: &str) -> Option<String> {
        let raw = ask_default(
            &mut self.input,
            "  Exclude characters (none to clear)",
            current,
        )?;
        Some(cleared(raw))
    }

    /// Exclusions that leave `separator` usable. A rejected answer comes
    /// back as the next default with the separator taken out.
    fn exclusions_keeping(&mut self, current: &str, separator: Separator) -> Option<String> {
        let mut default = current.to_string();
        loop {
            let answer = self.exclusions(&default)?;
            if Exclusion::new(&answer).allows(separator.as_str()) {
                return Some(answer);
            }
            println!("  ✗  The separator {separator} cannot be excluded.");
            default = answer.replace(separator.as_str(), "");
        }
    }
}

fn cleared(raw: String) -> String {
    if raw.eq_ignore_ascii_case(NONE) {
        String::new()
    } else {
        raw
    }
}
