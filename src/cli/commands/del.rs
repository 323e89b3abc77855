use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::OvertimeLedger;
use crate::errors::{AppError, AppResult};
use crate::store::StateStore;
use crate::ui::messages::success;
use crate::utils::date::fmt_iso;
use crate::utils::formatting::fmt_hours;

/// Delete one entry by its positional ledger index.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index } = cmd {
        let mut ledger = OvertimeLedger::open(StateStore::new(&cfg.state_file));

        let Some(entry) = ledger.state().ot_entries.get(*index).cloned() else {
            return Err(AppError::InvalidIndex(*index));
        };

        ledger.remove_entry(*index)?;

        success(format!(
            "Removed entry [{}]: {} {} {} hrs for {}.",
            index,
            fmt_iso(entry.date),
            entry.category.label(),
            fmt_hours(entry.hours),
            entry.display_name(),
        ));
    }

    Ok(())
}
