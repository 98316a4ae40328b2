//! In-memory attendance ledger: who is registered and who is currently in.

use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use crate::models::student::StudentRecord;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Result of feeding one card identifier to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Unknown(String),
    In(AttendanceEvent),
    Out(AttendanceEvent),
}

#[derive(Debug, Default)]
pub struct Ledger {
    students: BTreeMap<String, StudentRecord>,
}

impl Ledger {
    /// Build a ledger from roster records. Later duplicates of an id
    /// replace earlier ones; everybody starts absent.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = StudentRecord>,
    {
        let students = records
            .into_iter()
            .map(|mut r| {
                r.present = false;
                r.time_in = None;
                (r.id.clone(), r)
            })
            .collect();
        Self { students }
    }

    pub fn register(&mut self, record: StudentRecord) -> AppResult<()> {
        if self.students.contains_key(&record.id) {
            return Err(AppError::AlreadyRegistered(record.id));
        }
        self.students.insert(record.id.clone(), record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.students.get(id)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn present_count(&self) -> usize {
        self.students.values().filter(|s| s.present).count()
    }

    /// Students in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.students.values()
    }

    /// Toggle the presence of `id` at time `now`.
    pub fn on_scan(&mut self, id: &str, now: NaiveDateTime) -> ScanOutcome {
        let Some(student) = self.students.get_mut(id) else {
            return ScanOutcome::Unknown(id.to_string());
        };

        if student.present {
            let time_in = student.time_in.take().unwrap_or(now);
            student.present = false;
            ScanOutcome::Out(AttendanceEvent::check_out(student, time_in, now))
        } else {
            student.present = true;
            student.time_in = Some(now);
            ScanOutcome::In(AttendanceEvent::check_in(student, now))
        }
    }
}
