//! Read-only aggregation over the ledger.
//!
//! Everything here is recomputed on every call. Classification is never
//! cached on the entry itself: the pay-period boundary can change after an
//! entry was created, and the derivation is cheap.

use crate::core::payperiod;
use crate::models::category::OvertimeCategory;
use crate::models::entry::OvertimeEntry;
use crate::models::state::LedgerState;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashSet};

/// One employee's entries in ledger order, each tagged with its positional
/// index so callers can target the exact record for removal.
#[derive(Debug, Clone)]
pub struct EmployeeGroup {
    pub emp_no: String,
    pub last: String,
    pub first: String,
    pub entries: Vec<(usize, OvertimeEntry)>,
    pub total_hours: f64,
}

/// One week of one summary row: distinct entry dates (ascending) plus the
/// four category cells in [`OvertimeCategory::ALL`] order.
#[derive(Debug, Clone, Default)]
pub struct WeekCells {
    pub dates: Vec<NaiveDate>,
    pub cells: [f64; 4],
}

impl WeekCells {
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    pub fn cell(&self, category: OvertimeCategory) -> f64 {
        self.cells[category.index()]
    }
}

#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub emp_no: String,
    pub last: String,
    pub first: String,
    pub weeks: [WeekCells; 2],
    /// Raw count, out-of-range entries included.
    pub entry_count: usize,
}

impl SummaryRow {
    pub fn week1_total(&self) -> f64 {
        self.weeks[0].total()
    }

    pub fn week2_total(&self) -> f64 {
        self.weeks[1].total()
    }

    pub fn employee_total(&self) -> f64 {
        self.week1_total() + self.week2_total()
    }

    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last, self.first)
            .trim_matches(|c| c == ',' || c == ' ')
            .to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn grand_total(&self) -> f64 {
        self.rows.iter().map(|r| r.employee_total()).sum()
    }
}

/// Bucket entries into the two weeks of the pay period. Out-of-range
/// entries are excluded from cells and date lists, but they still appear
/// in entry lists and raw counts.
pub fn week_cells<'a, I>(entries: I, end: Option<NaiveDate>) -> [WeekCells; 2]
where
    I: IntoIterator<Item = &'a OvertimeEntry>,
{
    let mut dates = [BTreeSet::new(), BTreeSet::new()];
    let mut cells = [[0.0f64; 4]; 2];

    for entry in entries {
        if let Some(w) = payperiod::classify(entry.date, end).week_index() {
            cells[w][entry.category.index()] += entry.hours;
            dates[w].insert(entry.date);
        }
    }

    let [dates1, dates2] = dates;
    [
        WeekCells {
            dates: dates1.into_iter().collect(),
            cells: cells[0],
        },
        WeekCells {
            dates: dates2.into_iter().collect(),
            cells: cells[1],
        },
    ]
}

pub struct SummaryAggregator<'a> {
    state: &'a LedgerState,
}

impl<'a> SummaryAggregator<'a> {
    pub fn new(state: &'a LedgerState) -> Self {
        Self { state }
    }

    /// One group per distinct employee number, ordered by `(last, first)`
    /// plain string comparison; ties keep encounter order. Identity comes
    /// from the stored name snapshot, so orphaned entries group fine.
    pub fn group_by_employee(&self) -> Vec<EmployeeGroup> {
        let mut groups: Vec<EmployeeGroup> = Vec::new();

        for (idx, entry) in self.state.ot_entries.iter().enumerate() {
            match groups.iter_mut().find(|g| g.emp_no == entry.emp_no) {
                Some(g) => {
                    g.total_hours += entry.hours;
                    g.entries.push((idx, entry.clone()));
                }
                None => groups.push(EmployeeGroup {
                    emp_no: entry.emp_no.clone(),
                    last: entry.last.clone(),
                    first: entry.first.clone(),
                    entries: vec![(idx, entry.clone())],
                    total_hours: entry.hours,
                }),
            }
        }

        groups.sort_by(|a, b| {
            (a.last.as_str(), a.first.as_str()).cmp(&(b.last.as_str(), b.first.as_str()))
        });

        groups
    }

    /// Per-employee week/category matrix with totals, ready for rendering
    /// or export.
    pub fn summary_table(&self) -> SummaryTable {
        let end = self.state.pay_period_end;

        let rows = self
            .group_by_employee()
            .into_iter()
            .map(|g| {
                let weeks = week_cells(g.entries.iter().map(|(_, e)| e), end);
                SummaryRow {
                    emp_no: g.emp_no,
                    last: g.last,
                    first: g.first,
                    weeks,
                    entry_count: g.entries.len(),
                }
            })
            .collect();

        SummaryTable { rows }
    }

    /// Distinct employee numbers across all entries; drives the progress
    /// counter.
    pub fn unique_employee_count(&self) -> usize {
        self.state
            .ot_entries
            .iter()
            .map(|e| e.emp_no.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Entries grouped per employee number, insertion order preserved
    /// inside each group. This is the grouping handed to document
    /// generation.
    pub fn entries_by_emp_no(&self) -> Vec<(String, Vec<OvertimeEntry>)> {
        let mut out: Vec<(String, Vec<OvertimeEntry>)> = Vec::new();

        for entry in &self.state.ot_entries {
            match out.iter_mut().find(|(emp_no, _)| *emp_no == entry.emp_no) {
                Some((_, list)) => list.push(entry.clone()),
                None => out.push((entry.emp_no.clone(), vec![entry.clone()])),
            }
        }

        out
    }
}
