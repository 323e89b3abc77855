// src/export/xlsx.rs

use crate::core::payperiod;
use crate::core::summary::SummaryTable;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::category::OvertimeCategory;
use crate::ui::messages::info;
use crate::utils::date::{fmt_date_list, fmt_full, fmt_short};
use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;

const COL_WIDTHS: [f64; 7] = [30.0, 22.0, 10.0, 10.0, 10.0, 10.0, 10.0];

/// Styled overtime summary: per employee two stacked week rows, an
/// employee-total row, and a grand total.
pub(crate) fn export_xlsx(
    table: &SummaryTable,
    end: NaiveDate,
    dept_code: &str,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Overtime Summary")
        .map_err(to_export_error)?;

    // ---------------------------
    // Title block
    // ---------------------------
    let title_format = Format::new().set_bold().set_font_size(14);
    let bold = Format::new().set_bold().set_font_size(11);

    let weeks = payperiod::weeks_for(end);

    worksheet
        .merge_range(
            0,
            0,
            0,
            6,
            &format!("Dept. {dept_code} - Overtime Summary"),
            &title_format,
        )
        .map_err(to_export_error)?;

    worksheet
        .write_with_format(1, 0, format!("Pay Period Ending: {}", fmt_full(end)), &bold)
        .map_err(to_export_error)?;
    worksheet
        .write(
            2,
            0,
            format!(
                "Week 1: {} - {}",
                fmt_short(weeks.week1_start),
                fmt_full(weeks.week1_end)
            ),
        )
        .map_err(to_export_error)?;
    worksheet
        .write(
            3,
            0,
            format!(
                "Week 2: {} - {}",
                fmt_short(weeks.week2_start),
                fmt_full(weeks.week2_end)
            ),
        )
        .map_err(to_export_error)?;

    // ---------------------------
    // Header row
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x4472C4))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_text_wrap();

    let header_row: u32 = 5;
    let mut headers = vec!["Employee", "Week"];
    headers.extend(OvertimeCategory::ALL.iter().map(|c| c.label()));
    headers.push("Total");

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    // ---------------------------
    // Employee blocks
    // ---------------------------
    let center = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let week_label_format = Format::new()
        .set_bold()
        .set_font_size(10)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Left)
        .set_text_wrap();
    let name_format = Format::new()
        .set_bold()
        .set_font_size(10)
        .set_background_color(Color::RGB(0xF2F7FC))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();
    let total_label_format = Format::new()
        .set_bold()
        .set_font_size(10)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Right);
    let total_value_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    let mut row: u32 = header_row + 1;

    for summary_row in &table.rows {
        let name = format!("{} (#{})", summary_row.display_name(), summary_row.emp_no);

        worksheet
            .merge_range(row, 0, row + 1, 0, &name, &name_format)
            .map_err(to_export_error)?;

        for (week_idx, week) in summary_row.weeks.iter().enumerate() {
            let r = row + week_idx as u32;

            let dates = fmt_date_list(&week.dates);
            let label = if dates.is_empty() {
                format!("Wk {}", week_idx + 1)
            } else {
                format!("Wk {}: {}", week_idx + 1, dates)
            };
            worksheet
                .write_with_format(r, 1, label, &week_label_format)
                .map_err(to_export_error)?;

            for (ci, cat) in OvertimeCategory::ALL.iter().enumerate() {
                write_hours_cell(worksheet, r, (ci + 2) as u16, week.cell(*cat), &center)?;
            }
            write_hours_cell(worksheet, r, 6, week.total(), &center)?;
        }

        row += 2;

        // Employee total row
        worksheet
            .merge_range(row, 0, row, 5, "Employee Total", &total_label_format)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 6, summary_row.employee_total(), &total_value_format)
            .map_err(to_export_error)?;

        row += 1;
    }

    // ---------------------------
    // Grand total
    // ---------------------------
    let grand_label_format = Format::new()
        .set_bold()
        .set_font_size(12)
        .set_background_color(Color::RGB(0xE8F5E9))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Right);
    let grand_value_format = Format::new()
        .set_bold()
        .set_font_size(12)
        .set_background_color(Color::RGB(0xE8F5E9))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    worksheet
        .merge_range(row, 0, row, 5, "GRAND TOTAL", &grand_label_format)
        .map_err(to_export_error)?;
    worksheet
        .write_with_format(row, 6, table.grand_total(), &grand_value_format)
        .map_err(to_export_error)?;

    for (c, w) in COL_WIDTHS.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w)
            .map_err(to_export_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Zero cells stay visually empty but keep their border.
fn write_hours_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: f64,
    format: &Format,
) -> AppResult<()> {
    if value > 0.0 {
        worksheet
            .write_with_format(row, col, value, format)
            .map_err(to_export_error)?;
    } else {
        worksheet
            .write_with_format(row, col, "", format)
            .map_err(to_export_error)?;
    }
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export("invalid path".to_string()))
}
