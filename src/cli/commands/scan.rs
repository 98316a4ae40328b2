use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use chrono::Local;

/// Process one scan against a freshly loaded roster.
///
/// Presence is not kept between invocations, so a known card always
/// checks in here; use `run` for the full IN/OUT cycle.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan { id } = cmd {
        let mut session = Session::open(cfg)?;
        session.scan_at(id.trim(), Local::now().naive_local())?;
    }

    Ok(())
}
