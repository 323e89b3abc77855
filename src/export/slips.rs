// src/export/slips.rs

use super::notify_export_success;
use super::pdf::SlipPdf;
use crate::config::Config;
use crate::core::summary::{SummaryAggregator, WeekCells, week_cells};
use crate::errors::{AppError, AppResult};
use crate::models::category::OvertimeCategory;
use crate::models::employee::Employee;
use crate::models::state::LedgerState;
use crate::ui::messages::info;
use crate::utils::date::{fmt_date_list, fmt_mmddyy};
use crate::utils::formatting::fmt_hours_cell;
use chrono::NaiveDate;
use pdf_writer::Content;
use std::path::Path;

const COL_DATES: f32 = 164.0;
const COL_CAT: f32 = 60.0;
const COL_TOTAL: f32 = 100.0;
const ROW_H: f32 = 26.0;

/// One slip per roster employee, grid left empty for handwriting.
pub(crate) fn export_blank_slips(
    state: &LedgerState,
    cfg: &Config,
    end: NaiveDate,
    path: &Path,
) -> AppResult<()> {
    if state.employees.is_empty() {
        return Err(AppError::Export("No employees loaded".to_string()));
    }

    info(format!("Generating blank slips: {}", path.display()));

    let mut employees: Vec<&Employee> = state.employees.iter().collect();
    sort_by_name(&mut employees);

    let mut pdf = SlipPdf::new();
    for emp in &employees {
        draw_slip(
            &mut pdf,
            &emp.display_name(),
            &emp.emp_no,
            &cfg.dept_code,
            end,
            None,
        );
    }
    pdf.save(path)?;

    notify_export_success(
        &format!("Blank slips PDF ({} pages)", employees.len()),
        path,
    );
    Ok(())
}

/// One filled slip per roster employee that has overtime entries. The grid
/// carries the per-week aggregation; out-of-range entries are skipped by
/// the aggregation itself.
pub(crate) fn export_overtime_slips(
    state: &LedgerState,
    cfg: &Config,
    end: NaiveDate,
    path: &Path,
) -> AppResult<()> {
    let grouped = SummaryAggregator::new(state).entries_by_emp_no();

    let mut employees: Vec<&Employee> = state
        .employees
        .iter()
        .filter(|e| grouped.iter().any(|(emp_no, _)| *emp_no == e.emp_no))
        .collect();

    if employees.is_empty() {
        return Err(AppError::Export("No overtime entries found".to_string()));
    }

    sort_by_name(&mut employees);

    info(format!("Generating overtime slips: {}", path.display()));

    let mut pdf = SlipPdf::new();
    for emp in &employees {
        let entries = grouped
            .iter()
            .find(|(emp_no, _)| *emp_no == emp.emp_no)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[]);

        let weeks = week_cells(entries.iter(), Some(end));

        draw_slip(
            &mut pdf,
            &emp.display_name(),
            &emp.emp_no,
            &cfg.dept_code,
            end,
            Some(&weeks),
        );
    }
    pdf.save(path)?;

    notify_export_success(
        &format!("Overtime slips PDF ({} pages)", employees.len()),
        path,
    );
    Ok(())
}

/// Slips are filed by lower-cased (last, first), not ledger order.
fn sort_by_name(employees: &mut [&Employee]) {
    employees.sort_by(|a, b| {
        (a.last.to_lowercase(), a.first.to_lowercase())
            .cmp(&(b.last.to_lowercase(), b.first.to_lowercase()))
    });
}

fn draw_slip(
    pdf: &mut SlipPdf,
    name: &str,
    emp_no: &str,
    dept_code: &str,
    end: NaiveDate,
    weeks: Option<&[WeekCells; 2]>,
) {
    let mut content = pdf.new_page();

    let left = pdf.margin();
    let right = pdf.page_width() - pdf.margin();
    let center_x = pdf.page_width() / 2.0;

    pdf.text_bold_centered(&mut content, center_x, 718.0, 16.0, "TIME EXCEPTION SLIP");

    // Header fields, value over an underline
    let field_y1 = 672.0;
    let field_y2 = 644.0;

    pdf.text_bold(&mut content, left, field_y1, 10.0, "Employee Name:");
    pdf.text(&mut content, left + 86.0, field_y1, 11.0, name);
    pdf.hline(&mut content, left + 82.0, left + 290.0, field_y1 - 3.0);

    pdf.text_bold(&mut content, 360.0, field_y1, 10.0, "Dept:");
    pdf.text(&mut content, 392.0, field_y1, 11.0, dept_code);
    pdf.hline(&mut content, 388.0, 450.0, field_y1 - 3.0);

    pdf.text_bold(&mut content, left, field_y2, 10.0, "Employee #:");
    pdf.text(&mut content, left + 68.0, field_y2, 11.0, emp_no);
    pdf.hline(&mut content, left + 64.0, left + 180.0, field_y2 - 3.0);

    pdf.text_bold(&mut content, 360.0, field_y2, 10.0, "Pay Period Ending:");
    pdf.text(&mut content, 460.0, field_y2, 11.0, &fmt_mmddyy(end));
    pdf.hline(&mut content, 456.0, right, field_y2 - 3.0);

    // Category grid: header, week 1, week 2, totals
    let col_widths: [f32; 6] = [COL_DATES, COL_CAT, COL_CAT, COL_CAT, COL_CAT, COL_TOTAL];
    let grid_top = 596.0;

    let mut headers: Vec<String> = vec!["Dates".to_string()];
    headers.extend(OvertimeCategory::ALL.iter().map(|c| c.label().to_string()));
    headers.push("Total".to_string());

    let mut y = grid_top - ROW_H;
    draw_grid_row(pdf, &mut content, left, y, &col_widths, &headers, true);

    for week_idx in 0..2 {
        y -= ROW_H;

        let mut cells = vec![String::new(); 6];
        cells[0] = match weeks {
            Some(w) if !w[week_idx].dates.is_empty() => {
                format!("Wk {}: {}", week_idx + 1, fmt_date_list(&w[week_idx].dates))
            }
            _ => format!("Wk {}", week_idx + 1),
        };

        if let Some(w) = weeks {
            for (ci, cat) in OvertimeCategory::ALL.iter().enumerate() {
                cells[ci + 1] = fmt_hours_cell(w[week_idx].cell(*cat));
            }
            cells[5] = fmt_hours_cell(w[week_idx].total());
        }

        draw_grid_row(pdf, &mut content, left, y, &col_widths, &cells, false);
    }

    y -= ROW_H;
    let mut totals = vec!["Totals".to_string()];
    match weeks {
        Some(w) => {
            let mut grand = 0.0;
            for cat in OvertimeCategory::ALL {
                let sum = w[0].cell(cat) + w[1].cell(cat);
                grand += sum;
                totals.push(fmt_hours_cell(sum));
            }
            totals.push(fmt_hours_cell(grand));
        }
        None => totals.extend(std::iter::repeat_n(String::new(), 5)),
    }
    draw_grid_row(pdf, &mut content, left, y, &col_widths, &totals, true);

    // Signature block
    let sig_y = 180.0;
    pdf.hline(&mut content, left, left + 200.0, sig_y);
    pdf.text(&mut content, left, sig_y - 12.0, 9.0, "Employee Signature");
    pdf.hline(&mut content, 352.0, right, sig_y);
    pdf.text(&mut content, 352.0, sig_y - 12.0, 9.0, "Supervisor Approval");

    pdf.finalize_page(content);
}

fn draw_grid_row(
    pdf: &SlipPdf,
    content: &mut Content,
    x_start: f32,
    y: f32,
    col_widths: &[f32],
    cells: &[String],
    bold: bool,
) {
    let mut x = x_start;

    for (i, cell) in cells.iter().enumerate() {
        let w = col_widths[i];
        pdf.stroke_rect(content, x, y, w, ROW_H);

        if !cell.is_empty() {
            if i == 0 {
                // Dates column is left-aligned; the rest center
                if bold {
                    pdf.text_bold(content, x + 5.0, y + 9.0, 8.5, cell);
                } else {
                    pdf.text(content, x + 5.0, y + 9.0, 8.5, cell);
                }
            } else if bold {
                pdf.text_bold_centered(content, x + w / 2.0, y + 9.0, 8.5, cell);
            } else {
                pdf.text_centered(content, x + w / 2.0, y + 9.0, 8.5, cell);
            }
        }

        x += w;
    }
}
