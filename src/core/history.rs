use crate::errors::{AppError, AppResult};
use crate::models::event::{AttendanceRow, DATE_FMT};
use crate::models::event_kind::EventKind;
use crate::utils::colors::colorize_in_out;
use crate::utils::table::Table;
use chrono::NaiveDate;

/// Row filters for the `history` command; `None` matches everything.
#[derive(Debug, Default, Clone)]
pub struct HistoryFilter {
    pub date: Option<NaiveDate>,
    pub id: Option<String>,
    pub kind: Option<EventKind>,
}

impl HistoryFilter {
    pub fn new(date: Option<&str>, id: Option<&str>, kind: Option<EventKind>) -> AppResult<Self> {
        let date = date
            .map(|d| {
                NaiveDate::parse_from_str(d, DATE_FMT)
                    .map_err(|_| AppError::InvalidDate(d.to_string()))
            })
            .transpose()?;

        Ok(Self {
            date,
            id: id.map(str::to_string),
            kind,
        })
    }

    pub fn matches(&self, row: &AttendanceRow) -> bool {
        if let Some(d) = self.date
            && row.date != d.format(DATE_FMT).to_string()
        {
            return false;
        }
        if let Some(id) = &self.id
            && &row.id != id
        {
            return false;
        }
        if let Some(kind) = self.kind
            && row.kind() != kind
        {
            return false;
        }
        true
    }
}

pub struct HistoryLogic;

impl HistoryLogic {
    pub fn select<'a>(rows: &'a [AttendanceRow], filter: &HistoryFilter) -> Vec<&'a AttendanceRow> {
        rows.iter().filter(|r| filter.matches(r)).collect()
    }

    pub fn render(rows: &[&AttendanceRow]) -> String {
        let mut table = Table::new(&[
            "Date", "ID", "Name", "Grade", "Section", "TimeIn", "TimeOut",
        ]);
        for r in rows {
            table.add_row(vec![
                r.date.clone(),
                r.id.clone(),
                r.name.clone(),
                r.grade.clone(),
                r.section.clone(),
                colorize_in_out(&r.time_in, true),
                colorize_in_out(&r.time_out, false),
            ]);
        }
        table.render()
    }
}
