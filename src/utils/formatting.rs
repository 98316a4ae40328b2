//! Formatting utilities used for CLI outputs.

use chrono::Duration;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI escape pattern")
});

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s`, ignoring color escapes.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Render a stay length as `02h 25m`, or `42s` when under a minute.
pub fn duration2readable(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}
