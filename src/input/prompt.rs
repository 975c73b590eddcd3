//! Interactive prompt for the input path.

use regex::Regex;
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Matches a path with optional surrounding quotes, as pasted or dragged
/// into a terminal.
static PATH_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_path_regex() -> &'static Regex {
    PATH_REGEX.get_or_init(|| {
        Regex::new(r#"^\s*(?:"([^"]*)"|'([^']*)'|(.*?))\s*$"#).expect("Invalid Regex")
    })
}

/// Strip surrounding whitespace and one layer of matching quotes.
pub fn clean_path(input: &str) -> String {
    get_path_regex()
        .captures(input)
        .and_then(|caps| caps.get(1).or(caps.get(2)).or(caps.get(3)))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| input.trim().to_string())
}

/// Ask for the input file path on `writer` and read the answer from `reader`.
pub fn prompt_input_path<R, W>(reader: &mut R, writer: &mut W) -> Result<PathBuf, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "Enter path to the CIDR pairs CSV file: ")?;
    writer.flush()?;

    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 {
        return Err("No input path given (end of input)".into());
    }

    let path = clean_path(&line);
    if path.is_empty() {
        return Err("No input path given".into());
    }
    log::debug!("Prompted input path: {path}");
    Ok(PathBuf::from(path))
}
