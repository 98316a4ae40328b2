use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::activity::ttlog;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the roster file with its header row
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rAttendance…");

    cfg.init_all(cli.test)?;
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }

    let store = RecordStore::from_config(cfg);
    let created = store.ensure_roster()?;
    println!("🗂️  Roster      : {}", store.roster_path().display());
    println!("🗒️  Attendance  : {}", store.attendance_path().display());

    let message = if created {
        "Roster created"
    } else {
        "Roster already present"
    };

    if let Err(e) = ttlog(
        &cfg.log_path(),
        "init",
        &store.roster_path().to_string_lossy(),
        message,
    ) {
        warning(format!("Failed to write activity log: {}", e));
    }

    success("rAttendance initialization completed!");
    Ok(())
}
