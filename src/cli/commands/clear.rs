use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::OvertimeLedger;
use crate::errors::AppResult;
use crate::store::StateStore;
use crate::ui::messages::success;

/// Clear the session: entries and pay period reset together, the roster
/// survives.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes
            && !super::confirm("Clear all overtime data and start a new pay period?")?
        {
            return Ok(());
        }

        let mut ledger = OvertimeLedger::open(StateStore::new(&cfg.state_file));
        ledger.clear_session()?;

        success("Session cleared. Ready for a new pay period.");
    }

    Ok(())
}
