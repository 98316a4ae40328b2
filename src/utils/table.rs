//! Table rendering utilities for CLI outputs.

use super::formatting::visible_width;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.to_string(),
                width: visible_width(h),
            })
            .collect();
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row, widening columns to fit. Missing cells render empty.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(visible_width(cell));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.push_line(&mut out, &headers);

        let rule: Vec<String> = self.columns.iter().map(|c| "-".repeat(c.width)).collect();
        self.push_line(&mut out, &rule);

        for row in &self.rows {
            self.push_line(&mut out, row);
        }

        out
    }

    fn push_line<S: AsRef<str>>(&self, out: &mut String, cells: &[S]) {
        let mut line = String::new();
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
            line.push_str(cell);
            // pad by display width, not byte length
            let pad = col.width.saturating_sub(visible_width(cell));
            line.push_str(&" ".repeat(pad + 1));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}
