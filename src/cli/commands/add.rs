use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::OvertimeLedger;
use crate::core::payperiod;
use crate::core::session::ActiveSession;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::store::StateStore;
use crate::ui::messages::success;
use crate::utils::date::{fmt_iso, fmt_short, parse_date_flexible};
use crate::utils::formatting::fmt_hours;

/// Record one overtime entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        emp,
        date,
        category,
        hours,
    } = cmd
    {
        let mut ledger = OvertimeLedger::open(StateStore::new(&cfg.state_file));

        //
        // 1. Resolve the employee through the directory (missing argument
        //    flows through as "no selection")
        //
        let employee: Option<Employee> = match emp {
            Some(query) => Some(super::resolve_employee(ledger.state(), query)?),
            None => None,
        };
        let emp_no = employee
            .as_ref()
            .map(|e| e.emp_no.clone())
            .unwrap_or_default();

        //
        // 2. Parse the date (optional; the ledger reports a missing one)
        //
        let date_parsed = match date {
            Some(s) => {
                Some(parse_date_flexible(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?)
            }
            None => None,
        };

        //
        // 3. Category falls back to the configured default
        //
        let category = (*category).unwrap_or_else(|| cfg.category_default());

        //
        // 4. Validate and append
        //
        ledger.add_entry(&emp_no, date_parsed, category, *hours)?;

        // A successful add implies every field was present
        let (Some(employee), Some(d), Some(h)) = (employee, date_parsed, *hours) else {
            return Ok(());
        };

        success(format!(
            "Added {} hrs {} on {} for {}.",
            fmt_hours(h),
            category.label(),
            fmt_iso(d),
            employee.display_name(),
        ));

        //
        // 5. Echo the employee's entries, like the active card did
        //
        let state = ledger.state();
        let mut session = ActiveSession::new();
        session.select(&employee);

        let rows = session.entries_for_active(state);
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
    }

    Ok(())
}
