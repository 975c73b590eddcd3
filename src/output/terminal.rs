//! Terminal output utilities.
//!
//! Provides per-row progress notices and the end-of-run summary.

use super::table::OutputPaths;
use crate::models::{classify, ConflictReport, ConflictRow, ErrorRow};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn result_line(row: &ConflictRow) -> String {
    let status = if row.is_conflict {
        "CONFLICT".on_red().to_string()
    } else {
        "ok".green().to_string()
    };
    format!(
        "{source} [{class}] {status} {targets}",
        source = format_field(&row.source_cidr, 20),
        class = classify(&row.source_cidr),
        targets = row.conflicting_cidrs,
    )
}

fn error_line(row: &ErrorRow) -> String {
    format!(
        "{source} {status} {error}",
        source = format_field(&row.source_cidr, 20),
        status = "ERROR".on_yellow(),
        error = row.error,
    )
}

/// Print one progress line per processed row.
pub fn print_row_status(report: &ConflictReport) {
    for row in &report.results {
        println!("{}", result_line(row));
    }
    for row in &report.errors {
        println!("{}", error_line(row));
    }
}

/// Print totals and where the tables were written.
pub fn print_summary(report: &ConflictReport, paths: &OutputPaths) {
    let conflicts = report.conflict_count();
    let conflicts = if conflicts > 0 {
        conflicts.to_string().red().bold()
    } else {
        conflicts.to_string().green()
    };
    println!(
        "#{}# {} rows checked, {} conflicts, {} errors",
        "DONE".on_blue(),
        report.results.len() + report.errors.len(),
        conflicts,
        report.errors.len()
    );
    println!("  results: {}", paths.results.display());
    println!("  errors:  {}", paths.errors.display());
}
