//! A running attendance session: the ledger plus everything a scan touches.

use crate::config::Config;
use crate::core::command::{ConsoleCommand, HELP_TEXT};
use crate::core::ledger::{Ledger, ScanOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::event::{AttendanceEvent, TIME_FMT};
use crate::models::student::StudentRecord;
use crate::reader::TagFilter;
use crate::store::RecordStore;
use crate::store::activity::ttlog;
use crate::ui::messages::{bell, check_in, check_out, info, success, warning};
use crate::utils::colors::colorize_in_out;
use crate::utils::duration2readable;
use crate::utils::table::Table;
use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;

/// What the loop should do after a console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

pub struct Session {
    ledger: Ledger,
    store: RecordStore,
    filter: TagFilter,
    log_path: PathBuf,
    beep: bool,
}

impl Session {
    /// Make sure the roster exists and load it into a fresh ledger.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let store = RecordStore::from_config(cfg);
        if store.ensure_roster()? {
            info(format!("Created roster {}", store.roster_path().display()));
        }

        let load = store.load_roster()?;
        if load.skipped > 0 {
            warning(format!("Skipped {} incomplete roster rows", load.skipped));
        }

        Ok(Self {
            ledger: Ledger::from_records(load.students),
            store,
            filter: TagFilter::new(cfg.ignore_prefixes.clone()),
            log_path: cfg.log_path(),
            beep: cfg.beep,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Handle one raw frame from the reader. Status and blank lines are
    /// ignored and yield `Ok(None)`.
    pub fn handle_frame(&mut self, line: &str) -> AppResult<Option<ScanOutcome>> {
        let Some(tag) = self.filter.tag(line) else {
            return Ok(None);
        };
        let tag = tag.to_string();

        if self.beep {
            bell();
        }

        self.scan_at(&tag, Local::now().naive_local()).map(Some)
    }

    /// Apply a scan at `now`, append the resulting row and notify.
    pub fn scan_at(&mut self, id: &str, now: NaiveDateTime) -> AppResult<ScanOutcome> {
        let outcome = self.ledger.on_scan(id, now);

        match &outcome {
            ScanOutcome::Unknown(id) => {
                warning(format!("Unknown card: {}", id));
                info(format!(
                    "Type 'reg {} [Name] [Grade] [Section]' to register",
                    id
                ));
                self.note("unknown", id, "Unknown card scanned");
            }
            ScanOutcome::In(ev) => {
                self.store.append_event(ev)?;
                check_in(&ev.name, ev.at().format(TIME_FMT));
                self.note("scan", &ev.student_id, &scan_message(ev));
            }
            ScanOutcome::Out(ev) => {
                self.store.append_event(ev)?;
                let stay = ev.elapsed().map(duration2readable).unwrap_or_default();
                check_out(&ev.name, ev.at().format(TIME_FMT), &stay);
                self.note("scan", &ev.student_id, &scan_message(ev));
            }
        }

        Ok(outcome)
    }

    /// Register a new card in memory and in the roster file.
    pub fn register(&mut self, id: &str, name: &str, grade: &str, section: &str) -> AppResult<()> {
        let student = StudentRecord::new(id, name, grade, section)?;
        if self.ledger.get(&student.id).is_some() {
            return Err(AppError::AlreadyRegistered(student.id));
        }

        self.store.append_student(&student)?;
        success(format!(
            "Registered {} ({} {}) as card {}",
            student.name, student.grade, student.section, student.id
        ));
        self.note(
            "reg",
            &student.id,
            &format!("Registered {} {} {}", student.name, student.grade, student.section),
        );
        self.ledger.register(student)
    }

    pub fn handle_command(&mut self, cmd: ConsoleCommand) -> AppResult<Control> {
        match cmd {
            ConsoleCommand::Reg {
                id,
                name,
                grade,
                section,
            } => self.register(&id, &name, &grade, &section)?,
            ConsoleCommand::List => print!("{}", roster_table(&self.ledger)),
            ConsoleCommand::Help => println!("{}", HELP_TEXT),
            ConsoleCommand::Exit => return Ok(Control::Exit),
        }
        Ok(Control::Continue)
    }

    /// Write to the activity log; a failure here never stops a scan.
    pub fn note(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.log_path, operation, target, message) {
            warning(format!("Failed to write activity log: {}", e));
        }
    }
}

fn scan_message(ev: &AttendanceEvent) -> String {
    format!("{} {} at {}", ev.kind.label(), ev.name, ev.at().format(TIME_FMT))
}

/// Render the ledger as a table with a presence column and a summary line.
pub fn roster_table(ledger: &Ledger) -> String {
    if ledger.is_empty() {
        return "No students registered.\n".to_string();
    }

    let mut table = Table::new(&["ID", "Name", "Grade", "Section", "Status", "Since"]);
    for st in ledger.iter() {
        let since = st
            .time_in
            .map(|t| t.format(TIME_FMT).to_string())
            .unwrap_or_default();
        let status = if st.present { "IN" } else { "OUT" };
        table.add_row(vec![
            st.id.clone(),
            st.name.clone(),
            st.grade.clone(),
            st.section.clone(),
            colorize_in_out(status, st.present),
            since,
        ]);
    }

    format!(
        "{}\n{} of {} students present\n",
        table.render(),
        ledger.present_count(),
        ledger.len()
    )
}
