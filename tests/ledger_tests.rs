use chrono::NaiveDate;
use otledger::core::ledger::OvertimeLedger;
use otledger::errors::AppError;
use otledger::models::category::OvertimeCategory;
use otledger::models::employee::Employee;
use otledger::store::StateStore;
use std::env;
use std::fs;
use std::path::PathBuf;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn temp_state(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_ledger_state.json", name));
    fs::remove_file(&path).ok();
    path
}

fn roster() -> Vec<Employee> {
    vec![
        Employee::new("E001", "Rivera", "Alicia"),
        Employee::new("E002", "Chen", "Marcus"),
    ]
}

/// Ledger with roster and the 2024-03-16 pay period already set
fn seeded_ledger(name: &str) -> OvertimeLedger {
    let mut ledger = OvertimeLedger::open(StateStore::new(temp_state(name)));
    ledger.set_roster(roster()).expect("set roster");
    ledger
        .set_pay_period_end(d("2024-03-16"))
        .expect("set period");
    ledger
}

#[test]
fn test_validation_order_first_failure_wins() {
    let mut ledger = seeded_ledger("validation_order");

    // No employee beats everything else that is also missing
    let err = ledger
        .add_entry("", None, OvertimeCategory::Ot10, None)
        .unwrap_err();
    assert!(matches!(err, AppError::NoEmployeeSelected));

    let err = ledger
        .add_entry("E001", None, OvertimeCategory::Ot10, None)
        .unwrap_err();
    assert!(matches!(err, AppError::NoDateSelected));

    let err = ledger
        .add_entry("E001", Some(d("2024-03-05")), OvertimeCategory::Ot10, None)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidHours));

    let err = ledger
        .add_entry(
            "E001",
            Some(d("2024-03-17")),
            OvertimeCategory::Ot10,
            Some(1.0),
        )
        .unwrap_err();
    assert!(matches!(err, AppError::DateOutOfRange));

    // Nothing was stored along the way
    assert!(ledger.state().ot_entries.is_empty());
}

#[test]
fn test_zero_hours_rejected_ledger_unchanged() {
    let mut ledger = seeded_ledger("zero_hours");

    let err = ledger
        .add_entry(
            "E001",
            Some(d("2024-03-05")),
            OvertimeCategory::Ot10,
            Some(0.0),
        )
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidHours));
    assert_eq!(ledger.state().ot_entries.len(), 0);
}

#[test]
fn test_add_without_period_is_out_of_range() {
    let state = temp_state("no_period");
    let mut ledger = OvertimeLedger::open(StateStore::new(state));
    ledger.set_roster(roster()).expect("set roster");

    let err = ledger
        .add_entry(
            "E001",
            Some(d("2024-03-05")),
            OvertimeCategory::Ot10,
            Some(1.0),
        )
        .unwrap_err();
    assert!(matches!(err, AppError::DateOutOfRange));
}

#[test]
fn test_add_then_remove_restores_sequence() {
    let mut ledger = seeded_ledger("add_remove_roundtrip");

    ledger
        .add_entry(
            "E001",
            Some(d("2024-03-04")),
            OvertimeCategory::Ot10,
            Some(2.0),
        )
        .expect("add 1");
    ledger
        .add_entry(
            "E002",
            Some(d("2024-03-11")),
            OvertimeCategory::Cte15,
            Some(3.0),
        )
        .expect("add 2");

    let before = ledger.state().ot_entries.clone();

    ledger
        .add_entry(
            "E001",
            Some(d("2024-03-12")),
            OvertimeCategory::Ot15,
            Some(1.5),
        )
        .expect("add 3");
    ledger.remove_entry(2).expect("remove 3");

    assert_eq!(ledger.state().ot_entries, before);
}

#[test]
fn test_remove_out_of_bounds_is_a_recoverable_noop() {
    let mut ledger = seeded_ledger("remove_oob");

    ledger
        .add_entry(
            "E001",
            Some(d("2024-03-04")),
            OvertimeCategory::Ot10,
            Some(2.0),
        )
        .expect("add");

    let err = ledger.remove_entry(5).unwrap_err();
    assert!(matches!(err, AppError::InvalidIndex(5)));
    assert_eq!(ledger.state().ot_entries.len(), 1);
}

#[test]
fn test_name_snapshot_survives_roster_changes() {
    let mut ledger = seeded_ledger("name_snapshot");

    ledger
        .add_entry(
            "E001",
            Some(d("2024-03-04")),
            OvertimeCategory::Ot10,
            Some(2.0),
        )
        .expect("add");

    // Replace the roster with different spelling; the entry keeps its
    // insertion-time names
    ledger
        .set_roster(vec![Employee::new("E001", "RIVERA-SMITH", "Alicia")])
        .expect("set roster");

    let entry = &ledger.state().ot_entries[0];
    assert_eq!(entry.last, "Rivera");
    assert_eq!(entry.first, "Alicia");
}

#[test]
fn test_orphan_entry_gets_empty_name_snapshot() {
    let mut ledger = seeded_ledger("orphan_add");

    ledger
        .add_entry(
            "E999",
            Some(d("2024-03-04")),
            OvertimeCategory::Ot10,
            Some(1.0),
        )
        .expect("orphan add is allowed");

    let entry = &ledger.state().ot_entries[0];
    assert_eq!(entry.emp_no, "E999");
    assert!(entry.last.is_empty());
    assert!(entry.first.is_empty());
}

#[test]
fn test_clear_session_keeps_roster() {
    let mut ledger = seeded_ledger("clear_session");

    ledger
        .add_entry(
            "E001",
            Some(d("2024-03-04")),
            OvertimeCategory::Ot10,
            Some(2.0),
        )
        .expect("add");

    ledger.clear_session().expect("clear session");

    assert!(ledger.state().ot_entries.is_empty());
    assert!(ledger.state().pay_period_end.is_none());
    assert_eq!(ledger.state().employees.len(), 2);
}

#[test]
fn test_clear_roster_keeps_entries() {
    let mut ledger = seeded_ledger("clear_roster");

    ledger
        .add_entry(
            "E001",
            Some(d("2024-03-04")),
            OvertimeCategory::Ot10,
            Some(2.0),
        )
        .expect("add");

    ledger.clear_roster().expect("clear roster");

    assert!(ledger.state().employees.is_empty());
    assert_eq!(ledger.state().ot_entries.len(), 1);
}

#[test]
fn test_state_round_trips_through_the_store() {
    let path = temp_state("round_trip");

    {
        let mut ledger = OvertimeLedger::open(StateStore::new(&path));
        ledger.set_roster(roster()).expect("set roster");
        ledger
            .set_pay_period_end(d("2024-03-16"))
            .expect("set period");
        ledger
            .add_entry(
                "E001",
                Some(d("2024-03-04")),
                OvertimeCategory::Cte10,
                Some(4.5),
            )
            .expect("add");
    }

    let reopened = OvertimeLedger::open(StateStore::new(&path));
    assert_eq!(reopened.state().employees.len(), 2);
    assert_eq!(reopened.state().pay_period_end, Some(d("2024-03-16")));
    assert_eq!(reopened.state().ot_entries.len(), 1);
    assert_eq!(
        reopened.state().ot_entries[0].category,
        OvertimeCategory::Cte10
    );
    assert_eq!(reopened.state().ot_entries[0].hours, 4.5);
}

#[test]
fn test_corrupt_state_file_resets_to_defaults() {
    let path = temp_state("corrupt_state");
    fs::write(&path, "{ not json at all").expect("write garbage");

    let ledger = OvertimeLedger::open(StateStore::new(&path));
    assert!(ledger.state().employees.is_empty());
    assert!(ledger.state().pay_period_end.is_none());
    assert!(ledger.state().ot_entries.is_empty());
}

#[test]
fn test_period_change_keeps_existing_entries() {
    let mut ledger = seeded_ledger("period_change");

    ledger
        .add_entry(
            "E001",
            Some(d("2024-03-04")),
            OvertimeCategory::Ot10,
            Some(2.0),
        )
        .expect("add");

    // Move the period a month forward: the stored entry stays put
    ledger
        .set_pay_period_end(d("2024-04-13"))
        .expect("set period");

    assert_eq!(ledger.state().ot_entries.len(), 1);
    assert_eq!(ledger.state().pay_period_end, Some(d("2024-04-13")));
}
