use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::directory::EmployeeDirectory;
use crate::core::ledger::OvertimeLedger;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::roster::parse_employees;
use crate::store::StateStore;
use crate::ui::messages::{info, success};
use std::fs;

/// Import, list, search or clear the employee roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster {
        import,
        clear,
        list,
        search,
        yes,
    } = cmd
    {
        let mut ledger = OvertimeLedger::open(StateStore::new(&cfg.state_file));

        if let Some(file) = import {
            let bytes = fs::read(file)?;
            let employees = parse_employees(&bytes)?;
            let count = employees.len();
            ledger.set_roster(employees)?;
            success(format!("{count} employees loaded."));
            return Ok(());
        }

        if *clear {
            if !*yes
                && !super::confirm("Remove the employee list? You can import a new one after.")?
            {
                return Ok(());
            }
            ledger.clear_roster()?;
            success("Employee roster removed.");
            return Ok(());
        }

        if let Some(query) = search {
            let state = ledger.state();
            let directory = EmployeeDirectory::new(state);
            print_employees(&directory, &directory.search(query));
            return Ok(());
        }

        if *list {
            let state = ledger.state();
            let directory = EmployeeDirectory::new(state);
            print_employees(&directory, &directory.search(""));
            return Ok(());
        }

        info(format!(
            "{} employees loaded.",
            ledger.state().employees.len()
        ));
    }

    Ok(())
}

/// Employees that already have overtime entries get the checkmark the
/// search list shows.
fn print_employees(directory: &EmployeeDirectory<'_>, employees: &[&Employee]) {
    if employees.is_empty() {
        info("No matching employees.");
        return;
    }

    for emp in employees {
        let marker = if directory.has_entries(&emp.emp_no) {
            "✓"
        } else {
            " "
        };
        println!("{} {}, {} (#{})", marker, emp.last, emp.first, emp.emp_no);
    }

    println!("\n{} shown.", employees.len());
}
