use super::{event_kind::EventKind, student::StudentRecord};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// Header row of the attendance file.
pub const ATTENDANCE_HEADER: [&str; 7] =
    ["Date", "ID", "Name", "Grade", "Section", "TimeIn", "TimeOut"];

pub const DATE_FMT: &str = "%Y-%m-%d";
pub const TIME_FMT: &str = "%H:%M:%S";

/// A single IN or OUT transition, written straight to the attendance file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceEvent {
    pub kind: EventKind,
    pub date: NaiveDate,
    pub student_id: String,
    pub name: String,
    pub grade: String,
    pub section: String,
    pub time_in: NaiveDateTime,
    pub time_out: Option<NaiveDateTime>, // None for IN rows
}

impl AttendanceEvent {
    pub fn check_in(student: &StudentRecord, now: NaiveDateTime) -> Self {
        Self::build(EventKind::In, student, now, now, None)
    }

    pub fn check_out(student: &StudentRecord, time_in: NaiveDateTime, now: NaiveDateTime) -> Self {
        Self::build(EventKind::Out, student, now, time_in, Some(now))
    }

    fn build(
        kind: EventKind,
        student: &StudentRecord,
        now: NaiveDateTime,
        time_in: NaiveDateTime,
        time_out: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            kind,
            date: now.date(),
            student_id: student.id.clone(),
            name: student.name.clone(),
            grade: student.grade.clone(),
            section: student.section.clone(),
            time_in,
            time_out,
        }
    }

    /// Time of the transition itself: time-in for IN, time-out for OUT.
    pub fn at(&self) -> NaiveDateTime {
        self.time_out.unwrap_or(self.time_in)
    }

    pub fn elapsed(&self) -> Option<chrono::Duration> {
        self.time_out.map(|out| out - self.time_in)
    }

    pub fn to_row(&self) -> [String; 7] {
        [
            self.date.format(DATE_FMT).to_string(),
            self.student_id.clone(),
            self.name.clone(),
            self.grade.clone(),
            self.section.clone(),
            self.time_in.format(TIME_FMT).to_string(),
            self.time_out
                .map(|t| t.format(TIME_FMT).to_string())
                .unwrap_or_default(),
        ]
    }
}

/// One row of the attendance file as read back by the csv reader.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AttendanceRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Grade")]
    pub grade: String,
    #[serde(rename = "Section")]
    pub section: String,
    #[serde(rename = "TimeIn")]
    pub time_in: String,
    #[serde(rename = "TimeOut", default)]
    pub time_out: String,
}

impl AttendanceRow {
    /// Rows without a time-out were written by an IN transition.
    pub fn kind(&self) -> EventKind {
        if self.time_out.trim().is_empty() {
            EventKind::In
        } else {
            EventKind::Out
        }
    }
}
