use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::OvertimeLedger;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::StateStore;

/// Export entries or generate slip documents.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        blank,
        force,
    } = cmd
    {
        let ledger = OvertimeLedger::open(StateStore::new(&cfg.state_file));
        ExportLogic::export(ledger.state(), cfg, format.clone(), file, *blank, *force)?;
    }

    Ok(())
}
