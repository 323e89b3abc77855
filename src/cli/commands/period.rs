use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::OvertimeLedger;
use crate::core::payperiod;
use crate::errors::{AppError, AppResult};
use crate::store::StateStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{fmt_full, fmt_short, parse_date_flexible};
use chrono::NaiveDate;

/// Set or show the pay period ending date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Period { end, show: _ } = cmd {
        let mut ledger = OvertimeLedger::open(StateStore::new(&cfg.state_file));

        if let Some(end_str) = end {
            let d = parse_date_flexible(end_str)
                .ok_or_else(|| AppError::InvalidDate(end_str.clone()))?;

            // Advisory only, never blocks
            if !payperiod::is_standard_anchor(d, cfg.anchor()) {
                warning(format!("Note: this date is not a {}.", cfg.anchor_weekday));
            }

            ledger.set_pay_period_end(d)?;
            success(format!("Pay period ending set to {}.", fmt_full(d)));
            print_weeks(d);
            return Ok(());
        }

        match ledger.state().pay_period_end {
            Some(d) => {
                println!("Pay Period Ending: {}", fmt_full(d));
                print_weeks(d);
            }
            None => info("No pay period ending date set."),
        }
    }

    Ok(())
}

fn print_weeks(end: NaiveDate) {
    let w = payperiod::weeks_for(end);
    println!(
        "Week 1: {} – {}",
        fmt_short(w.week1_start),
        fmt_full(w.week1_end)
    );
    println!(
        "Week 2: {} – {}",
        fmt_short(w.week2_start),
        fmt_full(w.week2_end)
    );
}
