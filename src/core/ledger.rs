//! Ledger ownership and mutation.
//!
//! `OvertimeLedger` is the only writer of [`LedgerState`]; every mutation
//! persists the full state immediately. Read-only views
//! ([`crate::core::directory::EmployeeDirectory`],
//! [`crate::core::summary::SummaryAggregator`]) borrow `state()`.

use crate::core::payperiod;
use crate::errors::{AppError, AppResult};
use crate::models::category::OvertimeCategory;
use crate::models::employee::Employee;
use crate::models::entry::OvertimeEntry;
use crate::models::state::LedgerState;
use crate::store::StateStore;
use chrono::NaiveDate;

pub struct OvertimeLedger {
    state: LedgerState,
    store: StateStore,
}

impl OvertimeLedger {
    /// Load the persisted state; missing or corrupt data becomes the empty
    /// default, never an error.
    pub fn open(store: StateStore) -> Self {
        let state = store.load();
        Self { state, store }
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Replace the roster atomically. Existing entries are untouched even
    /// when their `emp_no` no longer matches any roster row; such orphans
    /// stay valid through their stored name snapshot.
    pub fn set_roster(&mut self, employees: Vec<Employee>) -> AppResult<()> {
        self.state.employees = employees;
        self.persist()
    }

    /// Replace the anchor date. Existing entries are not re-validated:
    /// classification is derived on read, so entries that fall outside the
    /// new window simply render as unclassified.
    pub fn set_pay_period_end(&mut self, end: NaiveDate) -> AppResult<()> {
        self.state.pay_period_end = Some(end);
        self.persist()
    }

    /// Validate and append one entry. Validation order, first failure wins:
    /// employee, date, hours, classification. On any failure the ledger is
    /// left unchanged.
    pub fn add_entry(
        &mut self,
        emp_no: &str,
        date: Option<NaiveDate>,
        category: OvertimeCategory,
        hours: Option<f64>,
    ) -> AppResult<()> {
        if emp_no.is_empty() {
            return Err(AppError::NoEmployeeSelected);
        }

        let date = date.ok_or(AppError::NoDateSelected)?;

        let hours = match hours {
            Some(h) if h > 0.0 => h,
            _ => return Err(AppError::InvalidHours),
        };

        if !payperiod::classify(date, self.state.pay_period_end).is_in_period() {
            return Err(AppError::DateOutOfRange);
        }

        // Name snapshot taken now; later roster changes leave it as-is.
        let (last, first) = match self.state.employees.iter().find(|e| e.emp_no == emp_no) {
            Some(emp) => (emp.last.clone(), emp.first.clone()),
            None => (String::new(), String::new()),
        };

        self.state.ot_entries.push(OvertimeEntry {
            emp_no: emp_no.to_string(),
            last,
            first,
            date,
            category,
            hours,
        });

        self.persist()
    }

    /// Remove by positional index into the entry list.
    pub fn remove_entry(&mut self, index: usize) -> AppResult<()> {
        if index >= self.state.ot_entries.len() {
            return Err(AppError::InvalidIndex(index));
        }
        self.state.ot_entries.remove(index);
        self.persist()
    }

    pub fn clear_roster(&mut self) -> AppResult<()> {
        self.state.employees.clear();
        self.persist()
    }

    /// Entries and pay period reset together; the roster survives.
    pub fn clear_session(&mut self) -> AppResult<()> {
        self.state.ot_entries.clear();
        self.state.pay_period_end = None;
        self.persist()
    }

    fn persist(&self) -> AppResult<()> {
        self.store.save(&self.state)
    }
}
