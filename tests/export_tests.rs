mod common;
use common::{init_state_with_data, otl, setup_state_file, temp_out, write_roster_csv};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_entries_csv() {
    let state = setup_state_file("export_csv");
    init_state_with_data(&state, "export_csv");

    let out = temp_out("export_csv", "csv");

    otl()
        .args(["--state", &state, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("emp_no"));
    assert!(content.contains("E001"));
    assert!(content.contains("2024-03-05"));
    assert!(content.contains("ot15"));
}

#[test]
fn test_export_entries_json() {
    let state = setup_state_file("export_json");
    init_state_with_data(&state, "export_json");

    let out = temp_out("export_json", "json");

    otl()
        .args(["--state", &state, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("Rivera"));
    assert!(content.contains("2024-03-12"));
    // Week classification is derived at export time
    assert!(content.contains("\"week\": \"1\""));
    assert!(content.contains("\"week\": \"2\""));
}

#[test]
fn test_export_xlsx_summary() {
    let state = setup_state_file("export_xlsx");
    init_state_with_data(&state, "export_xlsx");

    let out = temp_out("export_xlsx", "xlsx");

    otl()
        .args(["--state", &state, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_overtime_slips_pdf() {
    let state = setup_state_file("export_pdf");
    init_state_with_data(&state, "export_pdf");

    let out = temp_out("export_pdf", "pdf");

    otl()
        .args(["--state", &state, "export", "--format", "pdf", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_blank_slips_for_whole_roster() {
    let state = setup_state_file("export_blank");
    let roster = write_roster_csv("export_blank");

    otl()
        .args(["--state", &state, "roster", "--import", &roster])
        .assert()
        .success();
    otl()
        .args(["--state", &state, "period", "2024-03-16"])
        .assert()
        .success();

    let out = temp_out("export_blank", "pdf");

    otl()
        .args([
            "--state", &state, "export", "--format", "pdf", "--file", &out, "--blank",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 pages"));

    let bytes = fs::read(&out).expect("read blank slips pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_blank_flag_requires_pdf_format() {
    let state = setup_state_file("blank_csv");
    init_state_with_data(&state, "blank_csv");

    let out = temp_out("blank_csv", "csv");

    otl()
        .args([
            "--state", &state, "export", "--format", "csv", "--file", &out, "--blank",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pdf format"));
}

#[test]
fn test_overtime_export_without_entries_fails() {
    let state = setup_state_file("export_no_entries");
    let roster = write_roster_csv("export_no_entries");

    otl()
        .args(["--state", &state, "roster", "--import", &roster])
        .assert()
        .success();
    otl()
        .args(["--state", &state, "period", "2024-03-16"])
        .assert()
        .success();

    let out = temp_out("export_no_entries", "pdf");

    otl()
        .args(["--state", &state, "export", "--format", "pdf", "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No overtime entries found"));
}

#[test]
fn test_slips_require_a_pay_period() {
    let state = setup_state_file("export_no_period");
    let roster = write_roster_csv("export_no_period");

    otl()
        .args(["--state", &state, "roster", "--import", &roster])
        .assert()
        .success();

    let out = temp_out("export_no_period", "pdf");

    otl()
        .args([
            "--state", &state, "export", "--format", "pdf", "--file", &out, "--blank",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No pay period ending date set"));
}

#[test]
fn test_export_rejects_relative_paths() {
    let state = setup_state_file("export_relative");
    init_state_with_data(&state, "export_relative");

    otl()
        .args([
            "--state", &state, "export", "--format", "csv", "--file", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let state = setup_state_file("export_force");
    init_state_with_data(&state, "export_force");

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old contents").expect("seed existing file");

    otl()
        .args([
            "--state", &state, "export", "--format", "csv", "--file", &out, "-f",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("E001"));
}

#[test]
fn test_export_without_force_prompts_and_aborts() {
    let state = setup_state_file("export_noforce");
    init_state_with_data(&state, "export_noforce");

    let out = temp_out("export_noforce", "csv");
    fs::write(&out, "old contents").expect("seed existing file");

    // stdin is closed, so the overwrite prompt reads "no"
    otl()
        .args(["--state", &state, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not overwritten"));

    let content = fs::read_to_string(&out).expect("file untouched");
    assert_eq!(content, "old contents");
}
