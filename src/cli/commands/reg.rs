use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;

/// Register a card in the roster file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reg {
        id,
        name,
        grade,
        section,
    } = cmd
    {
        let mut session = Session::open(cfg)?;
        session.register(id, name, grade, section)?;
    }

    Ok(())
}
