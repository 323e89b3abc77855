//! Roster CSV import.
//!
//! Column headers vary between payroll exports, so each field resolves
//! through a list of known aliases; within a row the first non-empty
//! aliased column wins.

use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;

const LAST_ALIASES: &[&str] = &["LastName", "Last", "Last_Name", "Surname"];
const FIRST_ALIASES: &[&str] = &["FirstName", "First", "First_Name", "GivenName"];
const EMP_NO_ALIASES: &[&str] = &[
    "EmployeeNumber",
    "Employee #",
    "EmpNo",
    "EmployeeID",
    "Employee_Id",
];

/// Parse roster rows out of raw uploaded bytes. Rows with neither name
/// field are skipped; the result is sorted by lower-cased (last, first).
pub fn parse_employees(bytes: &[u8]) -> AppResult<Vec<Employee>> {
    let text = decode(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::Roster(format!("cannot read CSV header: {e}")))?
        .clone();

    let last_cols = alias_columns(&headers, LAST_ALIASES);
    let first_cols = alias_columns(&headers, FIRST_ALIASES);
    let emp_no_cols = alias_columns(&headers, EMP_NO_ALIASES);

    if last_cols.is_empty() && first_cols.is_empty() {
        return Err(AppError::Roster(
            "no name column found (expected LastName/FirstName or an alias)".to_string(),
        ));
    }

    let mut employees = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| AppError::Roster(format!("malformed CSV row: {e}")))?;

        let last = first_non_empty(&record, &last_cols);
        let first = first_non_empty(&record, &first_cols);
        let emp_no = first_non_empty(&record, &emp_no_cols);

        if last.is_empty() && first.is_empty() {
            continue;
        }

        employees.push(Employee {
            emp_no,
            last,
            first,
        });
    }

    employees.sort_by(|a, b| {
        (a.last.to_lowercase(), a.first.to_lowercase())
            .cmp(&(b.last.to_lowercase(), b.first.to_lowercase()))
    });

    Ok(employees)
}

/// Strip a UTF-8 BOM and decode lossily; payroll exports are not always
/// valid UTF-8.
fn decode(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

fn alias_columns(headers: &csv::StringRecord, aliases: &[&str]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, h)| aliases.iter().any(|a| h.eq_ignore_ascii_case(a)))
        .map(|(i, _)| i)
        .collect()
}

fn first_non_empty(record: &csv::StringRecord, columns: &[usize]) -> String {
    columns
        .iter()
        .filter_map(|&i| record.get(i))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or("")
        .to_string()
}
