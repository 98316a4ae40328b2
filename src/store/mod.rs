//! Append-only flat-file storage for the roster and the attendance log.
//!
//! Both files are plain CSV with a header row. Rows are only ever appended;
//! nothing here rewrites or removes a row that is already on disk.

pub mod activity;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::event::{ATTENDANCE_HEADER, AttendanceEvent, AttendanceRow};
use crate::models::student::{ROSTER_HEADER, StudentRecord};
use crate::utils::path::ensure_parent_dir;
use csv::{ReaderBuilder, StringRecord, Writer, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Students read from the roster plus the number of unusable rows.
#[derive(Debug, Default)]
pub struct RosterLoad {
    pub students: Vec<StudentRecord>,
    pub skipped: usize,
}

/// Attendance rows read back plus the number of rows that did not parse.
#[derive(Debug, Default)]
pub struct EventLoad {
    pub rows: Vec<AttendanceRow>,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    roster: PathBuf,
    attendance: PathBuf,
}

impl RecordStore {
    pub fn new(roster: impl Into<PathBuf>, attendance: impl Into<PathBuf>) -> Self {
        Self {
            roster: roster.into(),
            attendance: attendance.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.roster_path(), cfg.attendance_path())
    }

    pub fn roster_path(&self) -> &Path {
        &self.roster
    }

    pub fn attendance_path(&self) -> &Path {
        &self.attendance
    }

    /// Create the roster with its header row when missing or empty.
    /// Returns true when the file was (re)initialized.
    pub fn ensure_roster(&self) -> AppResult<bool> {
        if !needs_header(&self.roster)? {
            return Ok(false);
        }
        let mut wtr = open_append(&self.roster, &ROSTER_HEADER)?;
        wtr.flush()?;
        Ok(true)
    }

    /// Read every usable roster row. Rows with fewer than four fields or a
    /// blank field are skipped and counted.
    pub fn load_roster(&self) -> AppResult<RosterLoad> {
        if !self.roster.exists() {
            return Ok(RosterLoad::default());
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.roster)?;

        let mut load = RosterLoad::default();
        for result in rdr.records() {
            let record = result?;
            match student_from_record(&record) {
                Some(st) => load.students.push(st),
                None => load.skipped += 1,
            }
        }

        Ok(load)
    }

    pub fn append_student(&self, student: &StudentRecord) -> AppResult<()> {
        let mut wtr = open_append(&self.roster, &ROSTER_HEADER)?;
        wtr.write_record(student.roster_row())?;
        wtr.flush()?;
        Ok(())
    }

    pub fn append_event(&self, event: &AttendanceEvent) -> AppResult<()> {
        let mut wtr = open_append(&self.attendance, &ATTENDANCE_HEADER)?;
        wtr.write_record(&event.to_row())?;
        wtr.flush()?;
        Ok(())
    }

    /// Read back the attendance file in file order. A row cut short by an
    /// interrupted write is skipped and counted, not fatal.
    pub fn read_events(&self) -> AppResult<EventLoad> {
        if !self.attendance.exists() {
            return Ok(EventLoad::default());
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.attendance)?;
        let headers = rdr.headers()?.clone();

        let mut load = EventLoad::default();
        for result in rdr.records() {
            let record = result?;
            match record.deserialize::<AttendanceRow>(Some(&headers)) {
                Ok(row) => load.rows.push(row),
                Err(_) => load.skipped += 1,
            }
        }
        Ok(load)
    }
}

fn student_from_record(record: &StringRecord) -> Option<StudentRecord> {
    if record.len() < ROSTER_HEADER.len() {
        return None;
    }
    StudentRecord::new(&record[0], &record[1], &record[2], &record[3]).ok()
}

fn needs_header(path: &Path) -> AppResult<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len() == 0),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(e.into()),
    }
}

/// Open `path` for appending, writing `header` first if the file is new.
fn open_append(path: &Path, header: &[&str]) -> AppResult<Writer<File>> {
    ensure_parent_dir(path)?;

    let write_header = needs_header(path)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    if write_header {
        wtr.write_record(header)?;
    }

    Ok(wtr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event_kind::EventKind;
    use chrono::{NaiveDate, NaiveTime};
    use std::env;

    fn temp_store(name: &str) -> RecordStore {
        let dir = env::temp_dir().join(format!("rattendance_store_{name}"));
        fs::remove_dir_all(&dir).ok();
        RecordStore::new(dir.join("students.csv"), dir.join("attendance.csv"))
    }

    #[test]
    fn roster_header_written_once() {
        let store = temp_store("header_once");
        assert!(store.ensure_roster().unwrap());
        assert!(!store.ensure_roster().unwrap());

        let content = fs::read_to_string(store.roster_path()).unwrap();
        assert_eq!(content.lines().collect::<Vec<_>>(), vec!["ID,Name,Grade,Section"]);
    }

    #[test]
    fn roster_reload_round_trips_ids() {
        let store = temp_store("reload");
        store.ensure_roster().unwrap();
        for (id, name) in [("A1", "Ada"), ("B2", "Bob, Jr."), ("C3", "Cy")] {
            let st = StudentRecord::new(id, name, "10", "B").unwrap();
            store.append_student(&st).unwrap();
        }

        let load = store.load_roster().unwrap();
        let ids: Vec<_> = load.students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "B2", "C3"]);
        assert_eq!(load.students[1].name, "Bob, Jr.");
        assert!(load.students.iter().all(|s| !s.present && s.time_in.is_none()));
    }

    #[test]
    fn short_rows_are_skipped() {
        let store = temp_store("short_rows");
        fs::create_dir_all(store.roster_path().parent().unwrap()).unwrap();
        fs::write(
            store.roster_path(),
            "ID,Name,Grade,Section\nA1,Ada,10,B\nB2,Bob\n,Nobody,1,A\n",
        )
        .unwrap();

        let load = store.load_roster().unwrap();
        assert_eq!(load.students.len(), 1);
        assert_eq!(load.skipped, 2);
    }

    #[test]
    fn attendance_rows_are_appended_after_header() {
        let store = temp_store("attendance");
        let st = StudentRecord::new("A1", "Ada", "10", "B").unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let t_in = day.and_time(NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        let t_out = day.and_time(NaiveTime::from_hms_opt(14, 0, 0).unwrap());

        store.append_event(&AttendanceEvent::check_in(&st, t_in)).unwrap();
        store
            .append_event(&AttendanceEvent::check_out(&st, t_in, t_out))
            .unwrap();

        let content = fs::read_to_string(store.attendance_path()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "Date,ID,Name,Grade,Section,TimeIn,TimeOut");
        assert_eq!(lines[1], "2025-09-01,A1,Ada,10,B,08:00:00,");
        assert_eq!(lines[2], "2025-09-01,A1,Ada,10,B,08:00:00,14:00:00");

        let load = store.read_events().unwrap();
        assert_eq!(load.rows.len(), 2);
        assert_eq!(load.skipped, 0);
        assert_eq!(load.rows[0].kind(), EventKind::In);
        assert_eq!(load.rows[1].kind(), EventKind::Out);
    }

    #[test]
    fn truncated_attendance_row_is_skipped() {
        let store = temp_store("truncated");
        fs::create_dir_all(store.attendance_path().parent().unwrap()).unwrap();
        fs::write(
            store.attendance_path(),
            "Date,ID,Name,Grade,Section,TimeIn,TimeOut\n\
             2025-09-01,A1,Ada,10,B,08:00:00,\n\
             2025-09-01,A1,Ad\n",
        )
        .unwrap();

        let load = store.read_events().unwrap();
        assert_eq!(load.rows.len(), 1);
        assert_eq!(load.rows[0].id, "A1");
        assert_eq!(load.skipped, 1);
    }

    #[test]
    fn missing_files_read_as_empty() {
        let store = temp_store("missing");
        assert!(store.load_roster().unwrap().students.is_empty());
        assert!(store.read_events().unwrap().rows.is_empty());
    }
}
