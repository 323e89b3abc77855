use chrono::{Datelike, NaiveDate};

/// Input formats accepted anywhere the CLI takes a date. Payroll clerks
/// type both ISO and US forms.
const INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y", "%m/%d/%y", "%m-%d-%y"];

pub fn parse_date_flexible(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// `M/D`, no zero padding. Used for the per-week date lists.
pub fn fmt_short(d: NaiveDate) -> String {
    format!("{}/{}", d.month(), d.day())
}

/// `M/D/YYYY`, no zero padding.
pub fn fmt_full(d: NaiveDate) -> String {
    format!("{}/{}/{}", d.month(), d.day(), d.year())
}

/// `MM-DD-YY`, the slip and filename date convention.
pub fn fmt_mmddyy(d: NaiveDate) -> String {
    d.format("%m-%d-%y").to_string()
}

pub fn fmt_iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Comma-joined short labels for a set of dates already sorted ascending.
pub fn fmt_date_list(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| fmt_short(*d))
        .collect::<Vec<_>>()
        .join(", ")
}
