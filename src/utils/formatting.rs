//! Formatting utilities used for CLI and export outputs.

/// Hours always carry one decimal, so whole numbers render as `3.0`.
pub fn fmt_hours(h: f64) -> String {
    format!("{:.1}", h)
}

/// Cell form: zero displays as empty rather than `0.0`.
pub fn fmt_hours_cell(h: f64) -> String {
    if h > 0.0 { fmt_hours(h) } else { String::new() }
}
