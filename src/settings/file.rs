//! Settings file persistence.
//!
//! One line of comma separated fields; `|` escapes a literal `,` or `|`.
//! Included words form the variable-length tail of the line.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIXED_FIELDS: usize = 15;

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut fields = vec![
        settings.kind.to_string(),
        settings.count.to_string(),
        settings.length.to_string(),
        settings.upper.to_string(),
        settings.lower.to_string(),
        settings.digits.to_string(),
        settings.symbols.to_string(),
        escape(&settings.exclude),
        settings.segments.to_string(),
        settings.seg_length.to_string(),
        settings.separator.to_string(),
        settings.words.to_string(),
        settings.capitalize.to_string(),
        settings.add_number.to_string(),
        settings.copy.to_string(),
    ];
    fields.extend(settings.include.iter().map(|w| escape(w)));

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(format!("{}\n", fields.join(",")).as_bytes())?;

    tracing::debug!(path = %path.display(), "saved settings");
    Ok(())
}

/// Missing file means defaults; a short line is invalid data.
pub fn load(path: &Path) -> io::Result<Settings> {
    let mut settings = Settings::default();

    let file = match OpenOptions::new().read(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(settings),
        Err(e) => return Err(e),
    };

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Ok(settings);
    }

    let parts = split_escaped(line, ',');
    if parts.len() < FIXED_FIELDS {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{}: expected {FIXED_FIELDS} fields, found {}",
                path.display(),
                parts.len()
            ),
        ));
    }

    settings.kind = parts[0].parse().unwrap_or(settings.kind);
    settings.count = parts[1].parse().unwrap_or(settings.count);
    settings.length = parts[2].parse().unwrap_or(settings.length);
    settings.upper = parts[3].parse().unwrap_or(settings.upper);
    settings.lower = parts[4].parse().unwrap_or(settings.lower);
    settings.digits = parts[5].parse().unwrap_or(settings.digits);
    settings.symbols = parts[6].parse().unwrap_or(settings.symbols);
    settings.exclude = parts[7].clone();
    settings.segments = parts[8].parse().unwrap_or(settings.segments);
    settings.seg_length = parts[9].parse().unwrap_or(settings.seg_length);
    settings.separator = parts[10].parse().unwrap_or(settings.separator);
    settings.words = parts[11].parse().unwrap_or(settings.words);
    settings.capitalize = parts[12].parse().unwrap_or(settings.capitalize);
    settings.add_number = parts[13].parse().unwrap_or(settings.add_number);
    settings.copy = parts[14].parse().unwrap_or(settings.copy);
    settings.include = parts[FIXED_FIELDS..]
        .iter()
        .filter(|w| !w.is_empty())
        .cloned()
        .collect();

    // Zero counts would make the saved file unusable
    for value in [
        &mut settings.count,
        &mut settings.length,
        &mut settings.segments,
        &mut settings.seg_length,
        &mut settings.words,
    ] {
        *value = (*value).max(1);
    }

    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

#[inline]
pub fn path() -> PathBuf {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = env::var_os("HOME").unwrap_or_else(|| ".".into());
            PathBuf::from(home).join(".config")
        }
    };
    base.join("passgen").join("settings")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
