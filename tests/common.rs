#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn otl() -> Command {
    cargo_bin_cmd!("otledger")
}

/// Create a unique test state file path inside the system temp dir and
/// remove any existing file
pub fn setup_state_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_otledger_state.json", name));
    let state_path = path.to_string_lossy().to_string();
    fs::remove_file(&state_path).ok();
    state_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Three-row roster used across tests
pub const ROSTER_CSV: &str = "LastName,FirstName,EmployeeNumber\n\
Chen,Marcus,E002\n\
Rivera,Alicia,E001\n\
Ortega,Sam,E003\n";

pub fn write_roster_csv(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roster.csv", name));
    fs::write(&path, ROSTER_CSV).expect("write roster csv");
    path.to_string_lossy().to_string()
}

/// Import the roster, set the 2024-03-16 pay period (a Saturday), and add
/// one entry per week for E001
pub fn init_state_with_data(state_path: &str, name: &str) {
    let roster = write_roster_csv(name);

    otl()
        .args(["--state", state_path, "roster", "--import", &roster])
        .assert()
        .success();

    otl()
        .args(["--state", state_path, "period", "2024-03-16"])
        .assert()
        .success();

    otl()
        .args([
            "--state",
            state_path,
            "add",
            "E001",
            "--date",
            "2024-03-05",
            "--cat",
            "ot10",
            "--hours",
            "2.5",
        ])
        .assert()
        .success();

    otl()
        .args([
            "--state",
            state_path,
            "add",
            "E001",
            "--date",
            "2024-03-12",
            "--cat",
            "ot15",
            "--hours",
            "1.0",
        ])
        .assert()
        .success();
}
