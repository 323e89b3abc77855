use super::category::OvertimeCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded overtime occurrence. `last`/`first` are a name snapshot
/// taken from the roster at insertion time, so later roster edits do not
/// rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeEntry {
    pub emp_no: String, // ⇔ otEntries[].empNo
    pub last: String,
    pub first: String,
    pub date: NaiveDate, // ISO "YYYY-MM-DD" in the state file
    pub category: OvertimeCategory,
    pub hours: f64,
}

impl OvertimeEntry {
    /// "Last, First" from the stored snapshot.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last, self.first)
            .trim_matches(|c| c == ',' || c == ' ')
            .to_string()
    }
}
