//! Text rendering of the final temperature field
//!
//! Kept as pure formatting helpers so binaries stay thin wrappers; swapping
//! the presentation (JSON export, plotting) never touches the solver.

use crate::field::TemperatureField;

/// Render the field as fixed-width text, one line per row
///
/// Each value occupies a right-aligned 7-character field with three decimal
/// places, followed by a single space, top row first.
#[must_use]
pub fn render_grid(field: &TemperatureField) -> String {
    let mut out = String::new();
    for row in field.rows() {
        for value in row {
            out.push_str(&format!("{value:>7.3} "));
        }
        out.push('\n');
    }
    out
}

/// Render the iteration report line
#[must_use]
pub fn render_report(iterations: u32) -> String {
    format!("Method accomplished in {iterations} iterations.")
}
