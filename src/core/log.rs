use crate::config::Config;
use crate::errors::AppResult;
use crate::store::activity::{ActivityEntry, read_entries};
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 60;

/// Color of an operation in the printed log
fn color_for_operation(op: &str) -> Colour {
    match op {
        "scan" => Colour::Green,
        "unknown" => Colour::Red,
        "reg" => Colour::Yellow,
        "run" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// `operation (target)`, with only the operation word colored and the
/// visible text cut at `max` characters.
fn format_op_target(entry: &ActivityEntry, max: usize) -> String {
    let visible = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let truncated = if visible.chars().count() > max {
        let mut s: String = visible.chars().take(max.saturating_sub(3)).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    let color = color_for_operation(&entry.operation);
    match truncated.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn render(entries: &[ActivityEntry]) -> String {
        let formatted: Vec<String> = entries
            .iter()
            .map(|e| format_op_target(e, OP_MAX_WIDTH))
            .collect();

        let op_w = formatted
            .iter()
            .map(|s| strip_ansi(s).chars().count())
            .max()
            .unwrap_or(0);
        let id_w = entries.len().to_string().len();

        let mut out = String::new();
        for (i, (entry, op_target)) in entries.iter().zip(&formatted).enumerate() {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(op_target).chars().count()));
            out.push_str(&format!(
                "{:>id_w$}: {} | {}{} => {}\n",
                i + 1,
                entry.date,
                op_target,
                padding,
                entry.message,
                id_w = id_w
            ));
        }
        out
    }

    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let entries = read_entries(&cfg.log_path())?;

        if entries.is_empty() {
            println!("📜 Activity log is empty.");
            return Ok(());
        }

        println!("📜 Activity log:\n");
        print!("{}", Self::render(&entries));
        Ok(())
    }
}
