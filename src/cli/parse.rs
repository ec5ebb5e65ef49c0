use thiserror::Error;

use passgen::Separator;

use super::CliFlags;
use crate::settings::split_words;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid number {value:?} for --{flag}")]
    InvalidNumber { flag: String, value: String },
    #[error("invalid value {value:?} for --{flag}: {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
    #[error("flag needs an argument: --{0}")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("{0} cannot be combined with quick mode")]
    QuickModeArg(String),
}

/// Flags that consume a value.
const VALUE_FLAGS: &[&str] = &[
    "type",
    "length",
    "count",
    "exclude",
    "segments",
    "seg-length",
    "separator",
    "words",
    "include",
];

/// Flags allowed after a quick-mode `-` or `_`.
const QUICK_FLAGS: &[&str] = &["no-copy", "quiet", "verbose"];

fn canonical(name: &str) -> &str {
    match name {
        "h" => "help",
        "V" => "version",
        "q" => "quiet",
        "t" => "type",
        "l" => "length",
        "n" => "count",
        "x" => "exclude",
        "w" => "words",
        other => other,
    }
}

/// Parse `args` (program name first). Long flags take one or two dashes and
/// either `--flag value` or `--flag=value`.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    if let Some(first) = args.get(1)
        && (first == "-" || first == "_")
    {
        flags.quick = first.parse::<Separator>().ok();
        i = 2;
    }

    while i < args.len() {
        let arg = &args[i];
        let Some(stripped) = arg
            .strip_prefix("--")
            .or_else(|| arg.strip_prefix('-'))
            .filter(|s| !s.is_empty())
        else {
            return Err(ParseError::UnknownArg(arg.clone()));
        };

        let (name, inline) = match stripped.split_once('=') {
            Some((name, value)) => (canonical(name), Some(value.to_string())),
            None => (canonical(stripped), None),
        };

        if flags.quick.is_some() && !QUICK_FLAGS.contains(&name) {
            return Err(ParseError::QuickModeArg(arg.clone()));
        }

        if VALUE_FLAGS.contains(&name) {
            let value = match inline {
                Some(v) => v,
                None => {
                    i += 1;
                    args.get(i)
                        .cloned()
                        .ok_or_else(|| ParseError::MissingValue(name.to_string()))?
                }
            };
            apply_value(&mut flags, name, value)?;
        } else {
            let on = match inline.as_deref() {
                None | Some("true") => true,
                Some("false") => false,
                Some(other) => {
                    return Err(ParseError::InvalidValue {
                        flag: name.to_string(),
                        value: other.to_string(),
                        reason: "expected true or false".into(),
                    });
                }
            };
            apply_switch(&mut flags, name, on).ok_or_else(|| ParseError::UnknownArg(arg.clone()))?;
        }
        i += 1;
    }

    Ok(flags)
}

fn apply_switch(flags: &mut CliFlags, name: &str, on: bool) -> Option<()> {
    let toggle = match name {
        "no-copy" => &mut flags.no_copy,
        "no-upper" => &mut flags.no_upper,
        "no-lower" => &mut flags.no_lower,
        "no-digits" => &mut flags.no_digits,
        "no-symbols" => &mut flags.no_symbols,
        "capitalize" => &mut flags.capitalize,
        "add-number" => &mut flags.add_number,
        _ => {
            let slot = match name {
                "help" => &mut flags.help,
                "version" => &mut flags.version,
                "quiet" => &mut flags.quiet,
                "verbose" => &mut flags.verbose,
                "save" => &mut flags.save,
                "reset" => &mut flags.reset,
                _ => return None,
            };
            *slot = on;
            return Some(());
        }
    };
    *toggle = Some(on);
    Some(())
}

fn apply_value(flags: &mut CliFlags, name: &str, value: String) -> Result<(), ParseError> {
    let number = |value: &str| {
        value.trim().parse::<usize>().map_err(|_| ParseError::InvalidNumber {
            flag: name.to_string(),
            value: value.to_string(),
        })
    };
    let invalid = |value: &str, reason: String| ParseError::InvalidValue {
        flag: name.to_string(),
        value: value.to_string(),
        reason,
    };

    match name {
        "type" => flags.kind = Some(value.parse().map_err(|e| invalid(&value, e))?),
        "length" => flags.length = Some(number(&value)?),
        "count" => flags.count = Some(number(&value)?),
        "segments" => flags.segments = Some(number(&value)?),
        "seg-length" => flags.seg_length = Some(number(&value)?),
        "words" => flags.words = Some(number(&value)?),
        "separator" => flags.separator = Some(value.parse().map_err(|e| invalid(&value, e))?),
        "exclude" => flags.exclude = Some(value),
        "include" => flags.include.extend(split_words(&value)),
        _ => return Err(ParseError::UnknownArg(name.to_string())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Kind;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_single_and_double_dash_forms() {
        let flags = parse(&args(&[
            "-length", "32", "--count=3", "-no-symbols", "--exclude", "0OIl1",
        ]))
        .unwrap();
        assert_eq!(flags.length, Some(32));
        assert_eq!(flags.count, Some(3));
        assert_eq!(flags.no_symbols, Some(true));
        assert_eq!(flags.exclude.as_deref(), Some("0OIl1"));
    }

    #[test]
    fn parses_segment_and_passphrase_options() {
        let flags = parse(&args(&[
            "-t", "segment", "--segments", "4", "--seg-length", "5", "--separator", "_",
        ]))
        .unwrap();
        assert_eq!(flags.kind, Some(Kind::Segment));
        assert_eq!(flags.segments, Some(4));
        assert_eq!(flags.seg_length, Some(5));
        assert_eq!(flags.separator, Some(Separator::Underscore));

        let flags = parse(&args(&[
            "--type=passphrase", "-w", "3", "--include", "tiger,moon", "--include=sun",
            "--capitalize", "--add-number",
        ]))
        .unwrap();
        assert_eq!(flags.kind, Some(Kind::Passphrase));
        assert_eq!(flags.words, Some(3));
        assert_eq!(flags.include, ["tiger", "moon", "sun"]);
        assert_eq!((flags.capitalize, flags.add_number), (Some(true), Some(true)));
    }

    #[test]
    fn values_may_start_with_a_dash() {
        let flags = parse(&args(&["--separator", "-", "--exclude", "-_"])).unwrap();
        assert_eq!(flags.separator, Some(Separator::Dash));
        assert_eq!(flags.exclude.as_deref(), Some("-_"));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse(&args(&["--length", "ten"])),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse(&args(&["--separator", "."])),
            Err(ParseError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse(&args(&["--type", "pin"])),
            Err(ParseError::InvalidValue { .. })
        ));
        assert_eq!(
            parse(&args(&["--count"])),
            Err(ParseError::MissingValue("count".into()))
        );
        assert_eq!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg("--bogus".into()))
        );
        assert_eq!(
            parse(&args(&["stray"])),
            Err(ParseError::UnknownArg("stray".into()))
        );
    }

    #[test]
    fn quick_mode_takes_only_output_flags() {
        let flags = parse(&args(&["_", "--no-copy"])).unwrap();
        assert_eq!(flags.quick, Some(Separator::Underscore));
        assert_eq!(flags.no_copy, Some(true));
        assert_eq!(
            parse(&args(&["-", "--length", "9"])),
            Err(ParseError::QuickModeArg("--length".into()))
        );
    }

    #[test]
    fn switches_accept_explicit_booleans() {
        let flags = parse(&args(&["--no-copy=false", "--quiet=true", "-no-upper=false"])).unwrap();
        assert_eq!(flags.no_copy, Some(false));
        assert_eq!(flags.no_upper, Some(false));
        assert_eq!(flags.no_lower, None);
        assert!(flags.quiet);
        assert!(parse(&args(&["--quiet=maybe"])).is_err());
    }
}
