//! Tag reader: newline-delimited text frames coming from the RFID board.

pub mod replay;
pub mod serial;

use crate::errors::AppResult;

pub use replay::ReplayReader;
pub use serial::{PortConfig, SerialReader};

/// What a single read attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A complete line, without its terminator.
    Line(String),
    /// Nothing arrived before the read timeout.
    Idle,
    /// The source is exhausted and will never produce another line.
    Closed,
}

/// Anything that yields text frames one line at a time.
pub trait LineSource {
    fn read_frame(&mut self) -> AppResult<Frame>;
}

/// Decides which frames carry a card identifier and which are board chatter.
#[derive(Debug, Clone)]
pub struct TagFilter {
    ignore_prefixes: Vec<String>,
}

impl TagFilter {
    pub fn new(ignore_prefixes: Vec<String>) -> Self {
        Self { ignore_prefixes }
    }

    /// Return the trimmed identifier, or None for blank and status lines.
    pub fn tag<'a>(&self, line: &'a str) -> Option<&'a str> {
        let data = line.trim();
        if data.is_empty() {
            return None;
        }
        if self
            .ignore_prefixes
            .iter()
            .any(|p| !p.is_empty() && data.starts_with(p.as_str()))
        {
            return None;
        }
        Some(data)
    }
}
