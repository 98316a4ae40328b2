//! Internal activity log: one tab-separated line per notable operation.

use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;
use chrono::Local;
use csv::{ReaderBuilder, WriterBuilder};
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ActivityEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append one line to the activity log at `path`.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, ISO 8601
    let now = Local::now().to_rfc3339();

    ensure_parent_dir(path)?;

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(file);

    wtr.write_record([now.as_str(), operation, target, message])?;
    wtr.flush()?;

    Ok(())
}

/// Read every entry of the activity log, oldest first.
pub fn read_entries(path: &Path) -> AppResult<Vec<ActivityEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut entries = Vec::new();
    for result in rdr.deserialize() {
        let entry: ActivityEntry = result?;
        entries.push(entry);
    }
    Ok(entries)
}
