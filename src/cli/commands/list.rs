use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::core::session::roster_table;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{header, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::from_config(cfg);
    let load = store.load_roster()?;

    header(format!("Roster {}", store.roster_path().display()));
    if load.skipped > 0 {
        warning(format!("Skipped {} incomplete roster rows", load.skipped));
    }

    let ledger = Ledger::from_records(load.students);
    print!("{}", roster_table(&ledger));
    Ok(())
}
