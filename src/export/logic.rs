// src/export/logic.rs

use crate::config::Config;
use crate::core::summary::SummaryAggregator;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::entries_to_exports;
use crate::export::slips::{export_blank_slips, export_overtime_slips};
use crate::export::xlsx::export_xlsx;
use crate::models::state::LedgerState;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export orchestration.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the ledger.
    ///
    /// - `csv` / `json`: flat per-entry records.
    /// - `xlsx`: the week/category summary spreadsheet.
    /// - `pdf`: filled overtime slips, or blank slips for the whole roster
    ///   when `blank` is set.
    pub fn export(
        state: &LedgerState,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        blank: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if blank && !matches!(format, ExportFormat::Pdf) {
            return Err(AppError::Export(
                "blank slips are only available for the pdf format".to_string(),
            ));
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv | ExportFormat::Json => {
                let entries = entries_to_exports(state);
                if entries.is_empty() {
                    warning("No overtime entries to export.");
                    return Ok(());
                }
                match format {
                    ExportFormat::Csv => export_csv(&entries, path),
                    _ => export_json(&entries, path),
                }
            }
            ExportFormat::Xlsx => {
                let end = require_pay_period_end(state)?;
                let table = SummaryAggregator::new(state).summary_table();
                if table.rows.is_empty() {
                    return Err(AppError::Export("No overtime entries found".to_string()));
                }
                export_xlsx(&table, end, &cfg.dept_code, path)
            }
            ExportFormat::Pdf => {
                let end = require_pay_period_end(state)?;
                if blank {
                    export_blank_slips(state, cfg, end, path)
                } else {
                    export_overtime_slips(state, cfg, end, path)
                }
            }
        }
    }
}

/// Documents are anchored to a pay period; entry dumps are not.
fn require_pay_period_end(state: &LedgerState) -> AppResult<NaiveDate> {
    state
        .pay_period_end
        .ok_or_else(|| AppError::Export("No pay period ending date set".to_string()))
}
