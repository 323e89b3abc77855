use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::OvertimeLedger;
use crate::core::payperiod;
use crate::core::session::ActiveSession;
use crate::core::summary::SummaryAggregator;
use crate::errors::AppResult;
use crate::store::StateStore;
use crate::ui::messages::info;
use crate::utils::date::{fmt_iso, fmt_short};
use crate::utils::formatting::fmt_hours;

/// List overtime entries: everything in ledger order, or one employee's
/// entries date-ascending through the active-session view.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { emp } = cmd {
        let ledger = OvertimeLedger::open(StateStore::new(&cfg.state_file));
        let state = ledger.state();

        if let Some(query) = emp {
            let employee = super::resolve_employee(state, query)?;

            let mut session = ActiveSession::new();
            session.select(&employee);

            let rows = session.entries_for_active(state);
            if rows.is_empty() {
                info(format!(
                    "No entries yet for {}. Add overtime with `add`.",
                    employee.display_name()
                ));
                return Ok(());
            }

            println!("{} (#{})", employee.display_name(), employee.emp_no);

            let mut total = 0.0;
            for (idx, entry) in &rows {
                let wk = payperiod::classify(entry.date, state.pay_period_end);
                println!(
                    "  [{}] Wk {}  {:<6} {:<8} {} hrs",
                    idx,
                    wk.label(),
                    fmt_short(entry.date),
                    entry.category.label(),
                    fmt_hours(entry.hours)
                );
                total += entry.hours;
            }
            println!("  Total: {} hrs", fmt_hours(total));

            return Ok(());
        }

        if state.ot_entries.is_empty() {
            info("No overtime entries recorded.");
            return Ok(());
        }

        for (idx, entry) in state.ot_entries.iter().enumerate() {
            let wk = payperiod::classify(entry.date, state.pay_period_end);
            println!(
                "[{}] Wk {}  {}  {:<8} {} hrs  {} (#{})",
                idx,
                wk.label(),
                fmt_iso(entry.date),
                entry.category.label(),
                fmt_hours(entry.hours),
                entry.display_name(),
                entry.emp_no,
            );
        }

        let unique = SummaryAggregator::new(state).unique_employee_count();
        println!(
            "\n{} entries for {} employees.",
            state.ot_entries.len(),
            unique
        );
    }

    Ok(())
}
