use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::run::{RunLogic, StopReason, spawn_console};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::reader::{LineSource, PortConfig, ReplayReader, SerialReader};
use crate::ui::messages::{header, info, success};
use std::thread;
use std::time::Duration;

/// Start the attendance loop, on the serial reader or on a replay input.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { input } = cmd {
        let mut session = Session::open(cfg)?;
        info(format!(
            "Loaded {} students from database",
            session.ledger().len()
        ));

        let reason = match input.as_deref() {
            Some(path) => {
                let mut source = ReplayReader::open(path)?;
                success(format!("Replaying tag lines from {}", path));
                // stdin is the tag input itself, so no console commands
                let console = (path != "-").then(spawn_console);
                start(&mut session, &mut source, console.as_ref(), path)?
            }
            None => {
                let port = PortConfig::from_config(cfg);
                let mut source = SerialReader::open(&port)?;
                success(format!("Connected to reader on {}", port.port_path));
                // the board resets when the port opens
                thread::sleep(Duration::from_millis(cfg.settle_ms));
                let console = spawn_console();
                start(&mut session, &mut source, Some(&console), &port.port_path)?
            }
        };

        let present = session.ledger().present_count();
        session.note("run", "", &format!("Stopped ({:?}), {} present", reason, present));
        info(format!(
            "Stopped. {} of {} students still marked present.",
            present,
            session.ledger().len()
        ));
    }

    Ok(())
}

fn start<S: LineSource>(
    session: &mut Session,
    source: &mut S,
    console: Option<&std::sync::mpsc::Receiver<String>>,
    label: &str,
) -> AppResult<StopReason> {
    session.note("run", label, "Attendance loop started");

    header("RFID Attendance System");
    println!("Waiting for RFID scans...");
    if console.is_some() {
        println!("Type 'help' for commands.");
    }

    RunLogic::run(session, source, console)
}
