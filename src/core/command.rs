//! Commands typed on the console while the attendance loop is running.

use crate::errors::{AppError, AppResult};

pub const HELP_TEXT: &str = "\
Available commands:
  reg ID Name Grade Section   register a card (Name may contain spaces)
  list                        show registered students and who is in
  help                        show this help
  exit                        stop the attendance loop";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Reg {
        id: String,
        name: String,
        grade: String,
        section: String,
    },
    List,
    Help,
    Exit,
}

impl ConsoleCommand {
    /// Parse one console line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };

        let cmd = match verb.to_lowercase().as_str() {
            "reg" => parse_reg(parts.collect())?,
            "list" => Self::List,
            "help" | "?" => Self::Help,
            "exit" | "quit" => Self::Exit,
            other => return Err(AppError::UnknownCommand(other.to_string())),
        };

        Ok(Some(cmd))
    }
}

/// `reg ID Name... Grade Section`: the first token is the card, the last
/// two are grade and section, everything in between is the name.
fn parse_reg(args: Vec<&str>) -> AppResult<ConsoleCommand> {
    match args.len() {
        0 => Err(AppError::MissingField("ID")),
        1 => Err(AppError::MissingField("Name")),
        2 => Err(AppError::MissingField("Grade")),
        3 => Err(AppError::MissingField("Section")),
        n => Ok(ConsoleCommand::Reg {
            id: args[0].to_string(),
            name: args[1..n - 2].join(" "),
            grade: args[n - 2].to_string(),
            section: args[n - 1].to_string(),
        }),
    }
}
