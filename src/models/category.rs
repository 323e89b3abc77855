use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The four overtime categories a slip recognizes. Closed set: no other
/// values are ever stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OvertimeCategory {
    Ot10,
    Ot15,
    Cte10,
    Cte15,
}

impl OvertimeCategory {
    /// Fixed order used by the summary table, Excel columns, and slips.
    pub const ALL: [OvertimeCategory; 4] = [
        OvertimeCategory::Ot10,
        OvertimeCategory::Ot15,
        OvertimeCategory::Cte10,
        OvertimeCategory::Cte15,
    ];

    /// Stable code, same value persisted in the state file.
    pub fn code(&self) -> &'static str {
        match self {
            OvertimeCategory::Ot10 => "ot10",
            OvertimeCategory::Ot15 => "ot15",
            OvertimeCategory::Cte10 => "cte10",
            OvertimeCategory::Cte15 => "cte15",
        }
    }

    /// Display label used in terminal output and documents.
    pub fn label(&self) -> &'static str {
        match self {
            OvertimeCategory::Ot10 => "OT 1.0",
            OvertimeCategory::Ot15 => "OT 1.5",
            OvertimeCategory::Cte10 => "CTE 1.0",
            OvertimeCategory::Cte15 => "CTE 1.5",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ot10" => Some(OvertimeCategory::Ot10),
            "ot15" => Some(OvertimeCategory::Ot15),
            "cte10" => Some(OvertimeCategory::Cte10),
            "cte15" => Some(OvertimeCategory::Cte15),
            _ => None,
        }
    }

    /// Position in [`Self::ALL`].
    pub fn index(&self) -> usize {
        match self {
            OvertimeCategory::Ot10 => 0,
            OvertimeCategory::Ot15 => 1,
            OvertimeCategory::Cte10 => 2,
            OvertimeCategory::Cte15 => 3,
        }
    }
}
