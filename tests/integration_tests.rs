mod common;
use common::{init_state_with_data, otl, setup_state_file};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_full_flow_add_list_del() {
    let state = setup_state_file("full_flow");
    init_state_with_data(&state, "full_flow");

    otl()
        .args(["--state", &state, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-05"))
        .stdout(predicate::str::contains("2024-03-12"))
        .stdout(predicate::str::contains("2 entries for 1 employees."));

    otl()
        .args(["--state", &state, "del", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed entry [0]"));

    otl()
        .args(["--state", &state, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entries for 1 employees."));
}

#[test]
fn test_add_rejects_zero_hours() {
    let state = setup_state_file("zero_hours_cli");
    init_state_with_data(&state, "zero_hours_cli");

    otl()
        .args([
            "--state", &state, "add", "E002", "--date", "2024-03-05", "--hours", "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Enter hours greater than 0."));

    otl()
        .args(["--state", &state, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries for 1 employees."));
}

#[test]
fn test_add_rejects_date_outside_period() {
    let state = setup_state_file("oor_cli");
    init_state_with_data(&state, "oor_cli");

    otl()
        .args([
            "--state", &state, "add", "E002", "--date", "2024-03-17", "--hours", "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "outside the selected pay period",
        ));
}

#[test]
fn test_add_without_employee_reports_selection_error() {
    let state = setup_state_file("no_emp_cli");
    init_state_with_data(&state, "no_emp_cli");

    otl()
        .args(["--state", &state, "add", "--date", "2024-03-05", "--hours", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Search and select an employee first.",
        ));
}

#[test]
fn test_add_unknown_employee_fails() {
    let state = setup_state_file("unknown_emp_cli");
    init_state_with_data(&state, "unknown_emp_cli");

    otl()
        .args([
            "--state", &state, "add", "Nobody", "--date", "2024-03-05", "--hours", "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No roster employee matches"));
}

#[test]
fn test_add_resolves_unique_search_match() {
    let state = setup_state_file("search_match_cli");
    init_state_with_data(&state, "search_match_cli");

    // "ortega" uniquely matches E003
    otl()
        .args([
            "--state", &state, "add", "ortega", "--date", "2024-03-11", "--cat", "cte10",
            "--hours", "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ortega, Sam"));
}

#[test]
fn test_period_warns_on_non_saturday() {
    let state = setup_state_file("period_warn");

    otl()
        .args(["--state", &state, "period", "2024-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not a Saturday"));

    // Advisory only: the date was still stored
    otl()
        .args(["--state", &state, "period", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3/15/2024"));
}

#[test]
fn test_period_show_prints_week_ranges() {
    let state = setup_state_file("period_show");

    otl()
        .args(["--state", &state, "period", "2024-03-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 1: 3/3 – 3/9/2024"))
        .stdout(predicate::str::contains("Week 2: 3/10 – 3/16/2024"));
}

#[test]
fn test_clear_resets_session_but_keeps_roster() {
    let state = setup_state_file("clear_cli");
    init_state_with_data(&state, "clear_cli");

    otl()
        .args(["--state", &state, "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session cleared."));

    otl()
        .args(["--state", &state, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No overtime entries recorded."));

    otl()
        .args(["--state", &state, "roster", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rivera, Alicia (#E001)"));
}

#[test]
fn test_roster_clear_keeps_entries() {
    let state = setup_state_file("roster_clear_cli");
    init_state_with_data(&state, "roster_clear_cli");

    otl()
        .args(["--state", &state, "roster", "--clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee roster removed."));

    otl()
        .args(["--state", &state, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries for 1 employees."));
}

#[test]
fn test_state_file_record_shape() {
    let state = setup_state_file("state_shape");
    init_state_with_data(&state, "state_shape");

    let raw = fs::read_to_string(&state).expect("read state file");
    assert!(raw.contains("\"payPeriodEnd\": \"2024-03-16\""));
    assert!(raw.contains("\"otEntries\""));
    assert!(raw.contains("\"empNo\": \"E001\""));
    assert!(raw.contains("\"emp_no\": \"E001\""));
}

#[test]
fn test_summary_command_totals() {
    let state = setup_state_file("summary_cli");
    init_state_with_data(&state, "summary_cli");

    otl()
        .args(["--state", &state, "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rivera, Alicia (#E001)"))
        .stdout(predicate::str::contains("GRAND TOTAL: 3.5 hrs"))
        .stdout(predicate::str::contains("1 employees with overtime."));
}

#[test]
fn test_list_per_employee_sorted_by_date() {
    let state = setup_state_file("list_emp_cli");
    init_state_with_data(&state, "list_emp_cli");

    // A later entry with an earlier date should list first
    otl()
        .args([
            "--state", &state, "add", "E001", "--date", "2024-03-03", "--cat", "cte15",
            "--hours", "1.5",
        ])
        .assert()
        .success();

    let output = otl()
        .args(["--state", &state, "list", "--emp", "E001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 5.0 hrs"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&output);
    let first_pos = text.find("3/3").expect("3/3 shown");
    let later_pos = text.find("3/12").expect("3/12 shown");
    assert!(first_pos < later_pos);
}

#[test]
fn test_missing_state_file_is_an_empty_ledger() {
    let state = setup_state_file("missing_state");

    otl()
        .args(["--state", &state, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No overtime entries recorded."));
}

#[test]
fn test_corrupt_state_file_is_silently_reset() {
    let state = setup_state_file("corrupt_cli");
    fs::write(&state, "not json").expect("write garbage");

    otl()
        .args(["--state", &state, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No overtime entries recorded."));
}
