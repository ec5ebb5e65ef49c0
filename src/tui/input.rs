//! Answer collection for the interactive session.
//!
//! On a TTY each answer is edited in place with the default pre-filled.
//! Otherwise a plain line is read and an empty line or EOF takes the default.

use std::io::{self, BufRead};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::cli::quiet;
use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Where answers come from. `None` means the user cancelled.
pub trait LineSource {
    fn read(&mut self, prompt: &str, default: &str) -> Option<String>;
}

/// Answers from the process's stdin.
pub struct Console {
    tty: bool,
}

impl Console {
    pub fn new() -> Self {
        Self {
            tty: quiet::is_interactive(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for Console {
    fn read(&mut self, prompt: &str, default: &str) -> Option<String> {
        if self.tty {
            match edit_line(prompt, default) {
                Ok(answer) => return answer,
                Err(e) => {
                    tracing::debug!(error = %e, "line editor unavailable");
                    self.tty = false;
                }
            }
        }
        Some(read_plain(prompt, default))
    }
}

fn read_plain(prompt: &str, default: &str) -> String {
    print!("{prompt} [{default}]: ");
    flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => {
            println!();
            default.to_string()
        }
        Ok(_) => match line.trim() {
            "" => default.to_string(),
            answer => answer.to_string(),
        },
    }
}

/// Edit a line in raw mode, starting from `initial`.
fn edit_line(prompt: &str, initial: &str) -> io::Result<Option<String>> {
    let mut input: Vec<char> = initial.chars().collect();
    let mut cursor = input.len();
    let mut drawn = input.len();
    let prompt_width = crate::terminal::console_width(prompt);

    let mut guard = RawModeGuard::new()?;

    print!("{prompt}: {initial}");
    flush();

    let cancelled = loop {
        let key = match read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Esc => break true,
            KeyCode::Enter => break false,
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left if cursor > 0 => cursor -= 1,
            KeyCode::Right if cursor < input.len() => cursor += 1,
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let text: String = input.iter().collect();
        print!("\r{prompt}: {}", " ".repeat(drawn + 1));
        print!("\r{prompt}: {text}");
        print!("\x1b[{}G", prompt_width + 3 + cursor);
        flush();
        drawn = input.len();
    };

    guard.disable();
    println!();

    if cancelled {
        return Ok(None);
    }
    let answer: String = input.into_iter().collect();
    match answer.trim() {
        "" => Ok(Some(initial.to_string())),
        trimmed => Ok(Some(trimmed.to_string())),
    }
}

// ============================================================================
// Typed questions
// ============================================================================

pub fn ask_default(src: &mut impl LineSource, prompt: &str, default: &str) -> Option<String> {
    src.read(prompt, default)
}

/// Re-asks until the answer is an integer >= 1.
pub fn ask_int(src: &mut impl LineSource, prompt: &str, default: usize) -> Option<usize> {
    let default = default.max(1).to_string();
    loop {
        let raw = src.read(prompt, &default)?;
        match raw.parse::<usize>() {
            Ok(n) if n >= 1 => return Some(n),
            _ => println!("  ✗  Please enter a number >= 1."),
        }
    }
}

/// `y` or `yes` (any case) is yes, anything else no.
pub fn ask_yes_no(src: &mut impl LineSource, prompt: &str, default: bool) -> Option<bool> {
    let default = if default { "y" } else { "n" };
    let raw = src.read(&format!("{prompt} (y/n)"), default)?;
    Some(matches!(raw.to_lowercase().as_str(), "y" | "yes"))
}

/// Re-asks until the answer matches one of `choices`, ignoring case.
pub fn ask_choice<'a>(
    src: &mut impl LineSource,
    prompt: &str,
    choices: &[&'a str],
    default: &str,
) -> Option<&'a str> {
    loop {
        let raw = src.read(prompt, default)?;
        if let Some(choice) = choices.iter().find(|c| c.eq_ignore_ascii_case(&raw)) {
            return Some(*choice);
        }
        println!("  ✗  Please choose one of: {}", choices.join(" / "));
    }
}
