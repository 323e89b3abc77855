//! Unified application error type.
//! All modules (core, store, roster, export, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Entry validation
    // ---------------------------
    #[error("Search and select an employee first.")]
    NoEmployeeSelected,

    #[error("Select a date.")]
    NoDateSelected,

    #[error("Enter hours greater than 0.")]
    InvalidHours,

    #[error("Date is outside the selected pay period.")]
    DateOutOfRange,

    #[error("No entry at index {0}")]
    InvalidIndex(usize),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("No roster employee matches '{0}'")]
    UnknownEmployee(String),

    // ---------------------------
    // Roster import
    // ---------------------------
    #[error("Roster import error: {0}")]
    Roster(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("State file error: {0}")]
    Store(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
