use std::fmt;
use std::io::{self, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";
const FG_CYAN: &str = "\x1b[36m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_IN: &str = "🟢";
const ICON_OUT: &str = "🔴";

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

/// Check-in notification: `IN: <name> at <time>`
pub fn check_in<T: fmt::Display>(name: &str, at: T) {
    println!("{}{} IN:{} {} at {}", FG_GREEN, ICON_IN, RESET, name, at);
}

/// Check-out notification: `OUT: <name> at <time> (<stay>)`
pub fn check_out<T: fmt::Display>(name: &str, at: T, stay: &str) {
    println!(
        "{}{} OUT:{} {} at {} ({})",
        FG_RED, ICON_OUT, RESET, name, at, stay
    );
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", FG_CYAN, BOLD, msg, RESET);
}

/// Ring the terminal bell; stands in for the reader's beep.
pub fn bell() {
    let mut out = io::stdout();
    let _ = out.write_all(b"\x07");
    let _ = out.flush();
}
