//! The single employee currently being edited. Never persisted: the
//! selection lives only for the duration of one command.

use crate::models::employee::Employee;
use crate::models::entry::OvertimeEntry;
use crate::models::state::LedgerState;

/// States: no selection, or exactly one active employee. `select` always
/// lands in the active state, `clear` always leaves it.
#[derive(Debug, Default)]
pub struct ActiveSession {
    active_emp_no: Option<String>,
}

impl ActiveSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The employee is expected to come from a directory lookup; no further
    /// roster check happens here.
    pub fn select(&mut self, employee: &Employee) {
        self.active_emp_no = Some(employee.emp_no.clone());
    }

    pub fn clear(&mut self) {
        self.active_emp_no = None;
    }

    pub fn active_emp_no(&self) -> Option<&str> {
        self.active_emp_no.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active_emp_no.is_some()
    }

    /// Entries for the active employee, date ascending, each tagged with
    /// its positional index in the ledger so removal can target the exact
    /// record. Empty when nothing is selected.
    pub fn entries_for_active<'a>(&self, state: &'a LedgerState) -> Vec<(usize, &'a OvertimeEntry)> {
        let Some(emp_no) = self.active_emp_no.as_deref() else {
            return Vec::new();
        };

        let mut rows: Vec<(usize, &OvertimeEntry)> = state
            .ot_entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.emp_no == emp_no)
            .collect();

        rows.sort_by_key(|(_, e)| e.date);
        rows
    }
}
