use serde::{Deserialize, Serialize};

/// One roster row. The roster is a value snapshot replaced wholesale on
/// import; individual records are never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub emp_no: String, // ⇔ state.employees[].emp_no
    #[serde(default)]
    pub last: String,
    #[serde(default)]
    pub first: String,
}

impl Employee {
    pub fn new(emp_no: &str, last: &str, first: &str) -> Self {
        Self {
            emp_no: emp_no.to_string(),
            last: last.to_string(),
            first: first.to_string(),
        }
    }

    /// "Last, First" as printed on slips and in lists.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last, self.first)
            .trim_matches(|c| c == ',' || c == ' ')
            .to_string()
    }

    /// Lower-cased composite the directory search matches against:
    /// `"<last>, <first> <emp_no>"`.
    pub fn search_key(&self) -> String {
        format!("{}, {} {}", self.last, self.first, self.emp_no).to_lowercase()
    }
}
