// src/export/model.rs

use crate::core::payperiod;
use crate::models::state::LedgerState;
use crate::utils::date::fmt_iso;
use serde::Serialize;

/// Flat per-entry record for CSV/JSON export. Week is derived at export
/// time against the current pay period (`?` when unclassified).
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub emp_no: String,
    pub last: String,
    pub first: String,
    pub date: String,
    pub week: String,
    pub category: String,
    pub hours: f64,
}

pub(crate) fn entries_to_exports(state: &LedgerState) -> Vec<EntryExport> {
    state
        .ot_entries
        .iter()
        .map(|e| EntryExport {
            emp_no: e.emp_no.clone(),
            last: e.last.clone(),
            first: e.first.clone(),
            date: fmt_iso(e.date),
            week: payperiod::classify(e.date, state.pay_period_end)
                .label()
                .to_string(),
            category: e.category.code().to_string(),
            hours: e.hours,
        })
        .collect()
}
