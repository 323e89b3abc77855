pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod period;
pub mod roster;
pub mod summary;

use crate::core::directory::EmployeeDirectory;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::state::LedgerState;
use crate::ui::messages::{info, warning};
use std::io::{self, Write};

/// Shared y/N confirmation used by the destructive commands.
pub(crate) fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        Ok(true)
    } else {
        info("Cancelled.");
        Ok(false)
    }
}

/// Resolve a CLI employee argument: exact employee number first, then a
/// directory search that must match exactly one roster row.
pub(crate) fn resolve_employee(state: &LedgerState, query: &str) -> AppResult<Employee> {
    let directory = EmployeeDirectory::new(state);

    if let Some(emp) = directory.by_emp_no(query) {
        return Ok(emp.clone());
    }

    let matches = directory.search(query);
    match matches.as_slice() {
        [single] => Ok((*single).clone()),
        [] => Err(AppError::UnknownEmployee(query.to_string())),
        _ => {
            warning(format!(
                "'{}' matches {} employees; be more specific:",
                query,
                matches.len()
            ));
            for emp in matches.iter().take(5) {
                println!("  {}, {} (#{})", emp.last, emp.first, emp.emp_no);
            }
            Err(AppError::UnknownEmployee(query.to_string()))
        }
    }
}
