//! Reading and validating the input table.
//!
//! - [`prompt`] - Ask the user for the input path
//! - [`table`] - Read the CSV and check its structure

mod prompt;
mod table;

pub use prompt::{clean_path, prompt_input_path};
pub use table::{read_cidr_pairs, REQUIRED_COLUMNS};

use thiserror::Error;

/// Structural problems with the input file. Any of these stops the run.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input file does not exist: {0}")]
    FileNotFound(String),
    #[error("Input file must be a .csv file: {0}")]
    WrongExtension(String),
    #[error("Input must have exactly the columns CIDR1 and CIDR2, found: {0:?}")]
    Columns(Vec<String>),
    #[error("Error reading CSV: {0}")]
    Csv(#[from] csv::Error),
}
