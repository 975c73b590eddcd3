//! Output of conflict check results.
//!
//! This module handles writing and displaying a [`crate::models::ConflictReport`]:
//! - [`table`] - Results and errors files (CSV or JSON)
//! - [`terminal`] - Console progress and summary with colors

mod table;
mod terminal;

pub use table::{write_report, OutputPaths};
pub use terminal::{format_field, print_row_status, print_summary};
