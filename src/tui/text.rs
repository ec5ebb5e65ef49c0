use crate::terminal::{BOLD, Panel, RESET};

pub fn print_banner() {
    println!();
    Panel::new("passgen")
        .center(&format!("{BOLD}Password Generator{RESET}"))
        .center("Esc: cancel | CTRL+U: clear input")
        .print();
    println!();
}

pub fn print_help() {
    Panel::new("passgen")
        .center("Password, segmented password and passphrase generator")
        .blank()
        .line("MODES:")
        .line("  1) Interactive: Run without arguments. Prompts for every option,")
        .line("     with your saved settings as the defaults.")
        .line("  2) Flags: Pass options directly (e.g., -l 20 -n 5).")
        .line("  3) Quick: `passgen -` or `passgen _` prints a 5x5 segmented")
        .line("     password using that separator.")
        .blank()
        .line("USAGE:")
        .line("  passgen [OPTIONS]")
        .blank()
        .line("OPTIONS:")
        .line(" General:")
        .opt("  -t, --type <TYPE>", "random, segment or passphrase (default: random)")
        .opt("  -n, --count <N>", "How many to generate (default: 1)")
        .opt("      --no-upper", "Leave out uppercase letters")
        .opt("      --no-lower", "Leave out lowercase letters")
        .opt("      --no-digits", "Leave out digits")
        .opt("      --no-symbols", "Leave out symbols (random only)")
        .opt("  -x, --exclude <CHARS>", "Characters that must never appear")
        .blank()
        .line(" Random:")
        .opt("  -l, --length <N>", "Characters per password (default: 16)")
        .blank()
        .line(" Segmented:")
        .opt("      --segments <N>", "Number of segments (default: 3)")
        .opt("      --seg-length <N>", "Characters per segment (default: 4)")
        .opt("      --separator <- | _>", "Segment and word separator (default: -)")
        .blank()
        .line(" Passphrase:")
        .opt("  -w, --words <N>", "Number of words (default: 4)")
        .opt("      --capitalize", "Capitalize each word")
        .opt("      --add-number", "Append a number from 0 to 999")
        .opt("      --include <WORDS>", "Comma separated words to include. Repeatable.")
        .blank()
        .line(" Output:")
        .opt("      --no-copy", "Do not copy the last result to the clipboard")
        .opt("  -q, --quiet", "Suppress everything except results and errors")
        .opt("      --verbose", "Debug logging to stderr (or set PASSGEN_LOG)")
        .blank()
        .line(" Settings:")
        .opt("      --save", "Save the effective options as defaults")
        .opt("      --reset", "Restore the built-in defaults")
        .blank()
        .line(" Info:")
        .opt("  -h, --help", "Display this help message")
        .opt("  -V, --version", "Display version and entropy source")
        .blank()
        .line("EXAMPLES:")
        .line("  passgen                      Interactive mode")
        .line("  passgen -l 24 -n 3           Three 24-character passwords")
        .line("  passgen -t segment -x 0O1l   ab12-cd34-ef56 without 0, O, 1, l")
        .line("  passgen -t passphrase -w 5   Five-word passphrase")
        .line("  passgen _                    Quick 5x5 segmented password")
        .blank()
        .print();
    println!();
}
