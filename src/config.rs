//! Runtime configuration from environment variables.
//!
//! `main` calls `dotenv::dotenv()` first, so values may also come from a
//! `.env` file in the working directory.

use std::error::Error;
use std::path::PathBuf;

pub const ENV_INPUT: &str = "CIDR_CHECK_INPUT";
pub const ENV_OUTPUT_DIR: &str = "CIDR_CHECK_OUTPUT_DIR";
pub const ENV_OUTPUT_FORMAT: &str = "CIDR_CHECK_OUTPUT_FORMAT";
pub const ENV_DATED_OUTPUT: &str = "CIDR_CHECK_DATED_OUTPUT";
pub const ENV_QUIET: &str = "CIDR_CHECK_QUIET";

/// File format for the results and errors tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}' (expected csv or json)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Input table; prompt the user when `None`.
    pub input: Option<PathBuf>,
    /// Where results/errors go; defaults to the input file's directory.
    pub output_dir: Option<PathBuf>,
    pub output_format: OutputFormat,
    /// Append `_YYYY-MM-DD` to output file names.
    pub dated_output: bool,
    /// No per-row console progress.
    pub quiet: bool,
}

fn parse_flag(name: &str, value: &str) -> Result<bool, Box<dyn Error>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(format!("Invalid value '{other}' for {name} (expected true/false)").into()),
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns `None` for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let output_format = match non_empty(ENV_OUTPUT_FORMAT) {
            Some(v) => v.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };
        let dated_output = match lookup(ENV_DATED_OUTPUT) {
            Some(v) => parse_flag(ENV_DATED_OUTPUT, &v)?,
            None => false,
        };
        let quiet = match lookup(ENV_QUIET) {
            Some(v) => parse_flag(ENV_QUIET, &v)?,
            None => false,
        };

        let config = Config {
            input: non_empty(ENV_INPUT).map(|v| PathBuf::from(v.trim())),
            output_dir: non_empty(ENV_OUTPUT_DIR).map(|v| PathBuf::from(v.trim())),
            output_format,
            dated_output,
            quiet,
        };
        log::debug!("Config: {config:?}");
        Ok(config)
    }
}
