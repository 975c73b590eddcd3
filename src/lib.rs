//! Detect overlapping IPv4 CIDR blocks in a table of candidate pairs.
//!
//! Every `CIDR1` in the input is checked against every distinct `CIDR2`.
//! The results and the rows whose `CIDR1` could not be parsed are written
//! to two separate tables.

pub mod config;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use output::OutputPaths;
use std::error::Error;
use std::path::Path;

/// Counts and output locations of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub results: usize,
    pub conflicts: usize,
    pub errors: usize,
    pub paths: OutputPaths,
}

/// Read `input`, check it for conflicts and write the results and errors tables.
///
/// Structural problems with the input stop the run before anything is
/// checked or written.
pub fn run_conflict_check(config: &Config, input: &Path) -> Result<RunSummary, Box<dyn Error>> {
    log::info!("#Start run_conflict_check({})", input.display());

    let pairs = input::read_cidr_pairs(input)?;
    let report = processing::run(&pairs);

    if !config.quiet {
        output::print_row_status(&report);
    }

    let today = chrono::Local::now().date_naive();
    let paths = OutputPaths::for_input(input, config, today);
    output::write_report(&report, &paths, config.output_format)?;
    output::print_summary(&report, &paths);

    Ok(RunSummary {
        rows: pairs.len(),
        results: report.results.len(),
        conflicts: report.conflict_count(),
        errors: report.errors.len(),
        paths,
    })
}
