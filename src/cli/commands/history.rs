use crate::cli::parser::{Commands, KindFilter};
use crate::config::Config;
use crate::core::history::{HistoryFilter, HistoryLogic};
use crate::errors::AppResult;
use crate::models::event_kind::EventKind;
use crate::store::RecordStore;
use crate::ui::messages::{header, info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { date, id, kind } = cmd {
        let kind = kind.map(|k| match k {
            KindFilter::In => EventKind::In,
            KindFilter::Out => EventKind::Out,
        });
        let filter = HistoryFilter::new(date.as_deref(), id.as_deref(), kind)?;

        let store = RecordStore::from_config(cfg);
        let load = store.read_events()?;
        if load.skipped > 0 {
            warning(format!("Skipped {} unreadable attendance rows", load.skipped));
        }
        let selected = HistoryLogic::select(&load.rows, &filter);

        if selected.is_empty() {
            info("No attendance rows found.");
            return Ok(());
        }

        header(format!("Attendance {}", store.attendance_path().display()));
        print!("{}", HistoryLogic::render(&selected));
        println!("{} rows", selected.len());
    }

    Ok(())
}
