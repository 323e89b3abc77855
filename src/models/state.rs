use super::employee::Employee;
use super::entry::OvertimeEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The entire durable unit. Read in full at startup, overwritten in full
/// after every mutation; there is no incremental update path.
///
/// Field names match the persisted record exactly (`payPeriodEnd` is the
/// empty string while unset).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    #[serde(default)]
    pub employees: Vec<Employee>,

    #[serde(rename = "payPeriodEnd", default, with = "pay_period_end_fmt")]
    pub pay_period_end: Option<NaiveDate>,

    #[serde(rename = "otEntries", default)]
    pub ot_entries: Vec<OvertimeEntry>,
}

/// `payPeriodEnd` round-trips as `""` or `"YYYY-MM-DD"`.
mod pay_period_end_fmt {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
