use std::fmt;
use std::io::{self, BufRead, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Section header, one per day in listings.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
}

/// Ask a yes/no question on stdin. Anything but y/yes (including EOF) is "no".
pub fn ask_confirmation(prompt: &str, yes_label: &str, no_label: &str) -> bool {
    let stdin = io::stdin();
    ask_confirmation_from(&mut stdin.lock(), prompt, yes_label, no_label)
}

pub fn ask_confirmation_from<R: BufRead>(
    input: &mut R,
    prompt: &str,
    yes_label: &str,
    no_label: &str,
) -> bool {
    warning(prompt);
    print!("{yes_label} [y] / {no_label} [N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    match input.read_line(&mut s) {
        Ok(_) => matches!(s.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
