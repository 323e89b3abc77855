use crate::config::Config;
use crate::core::ledger::OvertimeLedger;
use crate::core::payperiod;
use crate::core::summary::SummaryAggregator;
use crate::errors::AppResult;
use crate::models::category::OvertimeCategory;
use crate::store::StateStore;
use crate::ui::messages::{info, warning};
use crate::utils::date::{fmt_date_list, fmt_full, fmt_short};
use crate::utils::formatting::{fmt_hours, fmt_hours_cell};
use crate::utils::table::Table;

/// Print the per-employee week/category summary with totals.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let ledger = OvertimeLedger::open(StateStore::new(&cfg.state_file));
    let state = ledger.state();

    let aggregator = SummaryAggregator::new(state);
    let table = aggregator.summary_table();

    if table.rows.is_empty() {
        info("No overtime entries recorded.");
        return Ok(());
    }

    match state.pay_period_end {
        Some(end) => {
            let w = payperiod::weeks_for(end);
            println!("Pay Period Ending: {}", fmt_full(end));
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
        None => warning("No pay period ending date set; all entries are unclassified."),
    }
    println!();

    let mut headers = vec!["Employee", "Week"];
    headers.extend(OvertimeCategory::ALL.iter().map(|c| c.label()));
    headers.push("Total");

    let mut out = Table::new(&headers);

    for row in &table.rows {
        let name = format!("{} (#{})", row.display_name(), row.emp_no);

        for (week_idx, week) in row.weeks.iter().enumerate() {
            let dates = fmt_date_list(&week.dates);
            let label = if dates.is_empty() {
                format!("Wk {}", week_idx + 1)
            } else {
                format!("Wk {}: {}", week_idx + 1, dates)
            };

            let mut cells = vec![
                if week_idx == 0 { name.clone() } else { String::new() },
                label,
            ];
            cells.extend(
                OvertimeCategory::ALL
                    .iter()
                    .map(|c| fmt_hours_cell(week.cell(*c))),
            );
            cells.push(fmt_hours_cell(week.total()));

            out.add_row(cells);
        }

        out.add_row(vec![
            String::new(),
            "Employee Total".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            fmt_hours(row.employee_total()),
        ]);
    }

    print!("{}", out.render());

    println!("\nGRAND TOTAL: {} hrs", fmt_hours(table.grand_total()));
    println!(
        "{} employees with overtime.",
        aggregator.unique_employee_count()
    );

    Ok(())
}
