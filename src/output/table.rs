//! Results and errors tables on disk.

use crate::config::{Config, OutputFormat};
use crate::models::{ConflictReport, ConflictRow, ErrorRow};
use chrono::NaiveDate;
use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Where a run writes its two tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub results: PathBuf,
    pub errors: PathBuf,
}

impl OutputPaths {
    /// Derive `<stem>_results.<ext>` and `<stem>_errors.<ext>` for `input`.
    ///
    /// Files go to `config.output_dir`, or next to the input. With
    /// `dated_output` set, `_YYYY-MM-DD` of `date` is appended to the stem.
    pub fn for_input(input: &Path, config: &Config, date: NaiveDate) -> OutputPaths {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "cidr_pairs".to_string());
        let dir = match &config.output_dir {
            Some(dir) => dir.clone(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        let suffix = if config.dated_output {
            format!("_{}", date.format("%Y-%m-%d"))
        } else {
            String::new()
        };
        let ext = config.output_format.extension();

        OutputPaths {
            results: dir.join(format!("{stem}_results{suffix}.{ext}")),
            errors: dir.join(format!("{stem}_errors{suffix}.{ext}")),
        }
    }
}

fn write_csv<T: Serialize>(
    path: &Path,
    headers: &[&str],
    rows: &[T],
) -> Result<(), Box<dyn Error>> {
    // Header is written by hand so an empty table still gets one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| format!("Error creating {}: {e}", path.display()))?;
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), Box<dyn Error>> {
    let file =
        File::create(path).map_err(|e| format!("Error creating {}: {e}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), rows)
        .map_err(|e| format!("Error writing JSON {}: {e}", path.display()))?;
    Ok(())
}

/// Write both tables of `report`, even when one is empty.
pub fn write_report(
    report: &ConflictReport,
    paths: &OutputPaths,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Csv => {
            write_csv(&paths.results, &ConflictRow::HEADERS, &report.results)?;
            write_csv(&paths.errors, &ErrorRow::HEADERS, &report.errors)?;
        }
        OutputFormat::Json => {
            write_json(&paths.results, &report.results)?;
            write_json(&paths.errors, &report.errors)?;
        }
    }
    log::info!(
        "Wrote {} results to {} and {} errors to {}",
        report.results.len(),
        paths.results.display(),
        report.errors.len(),
        paths.errors.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ConflictReport {
        ConflictReport {
            results: vec![
                ConflictRow {
                    source_cidr: "10.0.0.0/8".to_string(),
                    is_conflict: true,
                    conflicting_cidrs: "10.1.0.0/16,10.2.0.0/16".to_string(),
                },
                ConflictRow {
                    source_cidr: "192.168.0.0/16".to_string(),
                    is_conflict: false,
                    conflicting_cidrs: String::new(),
                },
            ],
            errors: vec![],
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_paths_next_to_input() {
        let paths = OutputPaths::for_input(Path::new("data/pairs.csv"), &Config::default(), date());
        assert_eq!(paths.results, PathBuf::from("data/pairs_results.csv"));
        assert_eq!(paths.errors, PathBuf::from("data/pairs_errors.csv"));
    }

    #[test]
    fn test_paths_dated_json_in_dir() {
        let config = Config {
            output_dir: Some(PathBuf::from("out")),
            output_format: OutputFormat::Json,
            dated_output: true,
            ..Default::default()
        };
        let paths = OutputPaths::for_input(Path::new("pairs.csv"), &config, date());
        assert_eq!(paths.results, PathBuf::from("out/pairs_results_2024-03-09.json"));
        assert_eq!(paths.errors, PathBuf::from("out/pairs_errors_2024-03-09.json"));
    }

    #[test]
    fn test_write_csv_report() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::for_input(
            &dir.path().join("pairs.csv"),
            &Config::default(),
            date(),
        );
        write_report(&sample_report(), &paths, OutputFormat::Csv).unwrap();

        let results = std::fs::read_to_string(&paths.results).unwrap();
        assert_eq!(
            results,
            "source CIDR,isConflict,conflicting CIDRs\n\
             10.0.0.0/8,True,\"10.1.0.0/16,10.2.0.0/16\"\n\
             192.168.0.0/16,False,\n"
        );
        let errors = std::fs::read_to_string(&paths.errors).unwrap();
        assert_eq!(errors, "source CIDR,error\n");
    }

    #[test]
    fn test_write_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            output_format: OutputFormat::Json,
            ..Default::default()
        };
        let paths = OutputPaths::for_input(&dir.path().join("pairs.csv"), &config, date());
        write_report(&sample_report(), &paths, OutputFormat::Json).unwrap();

        let results: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&paths.results).unwrap()).unwrap();
        assert_eq!(results[0]["isConflict"], "True");
        assert_eq!(results[1]["conflicting CIDRs"], "");
        let errors: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&paths.errors).unwrap()).unwrap();
        assert_eq!(errors, serde_json::json!([]));
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let paths = OutputPaths {
            results: PathBuf::from("no/such/dir/r.csv"),
            errors: PathBuf::from("no/such/dir/e.csv"),
        };
        assert!(write_report(&sample_report(), &paths, OutputFormat::Csv).is_err());
    }
}
