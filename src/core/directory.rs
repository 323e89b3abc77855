//! Roster search. A read-only view over the ledger state; results keep the
//! roster's original order, with no relevance ranking.

use crate::models::employee::Employee;
use crate::models::state::LedgerState;

/// Search results are capped; nobody scrolls past this in practice.
pub const SEARCH_LIMIT: usize = 50;

pub struct EmployeeDirectory<'a> {
    state: &'a LedgerState,
}

impl<'a> EmployeeDirectory<'a> {
    pub fn new(state: &'a LedgerState) -> Self {
        Self { state }
    }

    /// Case-insensitive substring match against `"<last>, <first> <emp_no>"`.
    /// The empty query matches every employee (still capped).
    pub fn search(&self, query: &str) -> Vec<&'a Employee> {
        let q = query.to_lowercase();
        self.state
            .employees
            .iter()
            .filter(|emp| emp.search_key().contains(&q))
            .take(SEARCH_LIMIT)
            .collect()
    }

    /// Exact employee-number lookup.
    pub fn by_emp_no(&self, emp_no: &str) -> Option<&'a Employee> {
        self.state.employees.iter().find(|e| e.emp_no == emp_no)
    }

    /// Informational marker for search results; never used to filter.
    pub fn has_entries(&self, emp_no: &str) -> bool {
        self.state.ot_entries.iter().any(|e| e.emp_no == emp_no)
    }
}
