/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Colors an IN/OUT marker: green for IN, red for OUT, grey when empty.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() {
        return format!("{GREY}--:--:--{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
