//! Terminal output utilities.
//!
//! Framed panels for help and the banner, result framing, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and clear attributes.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        match c {
            '\x1b' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if in_escape => {}
            _ => width += 1,
        }
    }
    width
}

fn pad_to(content: &str, width: usize) -> String {
    let fill = width.saturating_sub(console_width(content));
    format!("{content}{}", " ".repeat(fill))
}

// ============================================================================
// Panels
// ============================================================================

pub const PANEL_WIDTH: usize = 74;

/// Width of the flag column in option rows.
const FLAG_COL: usize = 27;

/// A box-drawn block of text, built line by line and printed at once.
pub struct Panel {
    width: usize,
    title: String,
    rows: Vec<String>,
}

impl Panel {
    pub fn new(title: &str) -> Self {
        Self::with_width(title, PANEL_WIDTH)
    }

    pub fn with_width(title: &str, width: usize) -> Self {
        Self {
            width,
            title: title.to_string(),
            rows: Vec::new(),
        }
    }

    fn inner(&self) -> usize {
        self.width - 4
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    pub fn line(&mut self, content: &str) -> &mut Self {
        self.rows.push(pad_to(content, self.inner()));
        self
    }

    pub fn center(&mut self, content: &str) -> &mut Self {
        let fill = self.inner().saturating_sub(console_width(content));
        let left = " ".repeat(fill / 2);
        self.rows.push(pad_to(&format!("{left}{content}"), self.inner()));
        self
    }

    /// Flag in a fixed column, description word-wrapped beside it.
    pub fn opt(&mut self, flag: &str, desc: &str) -> &mut Self {
        let desc_col = self.inner() - FLAG_COL;
        let mut wrapped: Vec<String> = vec![String::new()];
        for word in desc.split_whitespace() {
            let Some(current) = wrapped.last_mut() else {
                break;
            };
            if current.is_empty() {
                current.push_str(word);
            } else if current.len() + 1 + word.len() <= desc_col {
                current.push(' ');
                current.push_str(word);
            } else {
                wrapped.push(word.to_string());
            }
        }

        for (i, text) in wrapped.iter().enumerate() {
            let lead = if i == 0 { flag } else { "" };
            let row = format!("{}{text}", pad_to(lead, FLAG_COL));
            self.rows.push(pad_to(&row, self.inner()));
        }
        self
    }

    pub fn render(&self) -> String {
        let rule = self.width - 2;
        let mut out = if self.title.is_empty() {
            format!("┌{}┐\n", "─".repeat(rule))
        } else {
            let head = format!("─ {} ", self.title);
            let rest = rule.saturating_sub(console_width(&head));
            format!("┌{head}{}┐\n", "─".repeat(rest))
        };
        for row in &self.rows {
            out.push_str(&format!("│ {row} │\n"));
        }
        out.push_str(&format!("└{}┘\n", "─".repeat(rule)));
        out
    }

    pub fn print(&self) {
        print!("{}", self.render());
        flush();
    }
}

// ============================================================================
// Results
// ============================================================================

pub const DIVIDER_WIDTH: usize = 44;

/// Print the indented divider that frames interactive results.
pub fn print_divider() {
    println!("  {}", "─".repeat(DIVIDER_WIDTH));
}

/// Lines shown for a batch: a single secret inline, several as a numbered list.
pub fn result_lines<S: AsRef<str>>(secrets: &[S]) -> Vec<String> {
    match secrets {
        [one] => vec![format!("  Password: {}", one.as_ref())],
        many => std::iter::once("  Generated passwords:".to_string())
            .chain(
                many.iter()
                    .enumerate()
                    .map(|(i, s)| format!("  {:>2}. {}", i + 1, s.as_ref())),
            )
            .collect(),
    }
}

/// Print a batch between two dividers.
pub fn print_results<S: AsRef<str>>(secrets: &[S]) {
    print_divider();
    for line in result_lines(secrets) {
        println!("{line}");
    }
    print_divider();
    flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_codes_take_no_width() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{BOLD}bold{RESET}")), 4);
        assert_eq!(console_width("─ passgen "), 10);
    }

    #[test]
    fn panel_rows_share_one_width() {
        let mut panel = Panel::with_width("title", 60);
        panel
            .center(&format!("{BOLD}centered{RESET}"))
            .blank()
            .line("left")
            .opt(
                "  -x, --exclude <CHARS>",
                "a description long enough that it has to wrap onto more lines",
            );
        let rendered = panel.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines.len() > 6);
        assert!(lines.iter().all(|l| console_width(l) == 60), "{rendered}");
        assert!(lines[0].starts_with("┌─ title ─"));
    }

    #[test]
    fn wrapped_descriptions_keep_the_flag_column() {
        let mut panel = Panel::with_width("", 50);
        panel.opt("--flag", "one two three four five six seven eight nine");
        let rendered = panel.render();
        let rows: Vec<&str> = rendered.lines().skip(1).collect();
        assert!(rows[0].starts_with("│ --flag"));
        assert!(rows[1].starts_with(&format!("│ {}", " ".repeat(FLAG_COL))));
    }

    #[test]
    fn single_result_is_inline() {
        assert_eq!(result_lines(&["abc"]), vec!["  Password: abc"]);
    }

    #[test]
    fn batches_are_numbered() {
        let secrets: Vec<String> = (1..=10).map(|i| format!("s{i}")).collect();
        let lines = result_lines(&secrets);
        assert_eq!(lines[0], "  Generated passwords:");
        assert_eq!(lines[1], "   1. s1");
        assert_eq!(lines[10], "  10. s10");
    }
}
