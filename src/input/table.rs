//! CSV input with a fixed `CIDR1`,`CIDR2` header.

use super::InputError;
use crate::models::CidrPair;
use itertools::Itertools;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 2] = ["CIDR1", "CIDR2"];

/// Read every row of `path` as a [`CidrPair`].
///
/// The file must exist, end in `.csv` and have exactly the columns
/// `CIDR1` and `CIDR2` (any order). Field values are trimmed but otherwise
/// passed through unchecked.
pub fn read_cidr_pairs(path: &Path) -> Result<Vec<CidrPair>, InputError> {
    let display = path.display().to_string();
    if !path.is_file() {
        return Err(InputError::FileNotFound(display));
    }
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(InputError::WrongExtension(display));
    }

    log::info!("Reading CIDR pairs from: {display}");
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let columns_ok = headers.len() == REQUIRED_COLUMNS.len()
        && headers
            .iter()
            .map(|h| h.as_str())
            .sorted()
            .eq(REQUIRED_COLUMNS.iter().copied());
    if !columns_ok {
        log::error!("Bad input columns in {display}: {headers:?}");
        return Err(InputError::Columns(headers));
    }

    let pairs = reader
        .deserialize::<CidrPair>()
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("# Got {} CIDR pairs", pairs.len());
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_DATA: &str = "src/tests/test_data";

    #[test]
    fn test_read_pairs() {
        let pairs = read_cidr_pairs(Path::new(&format!("{TEST_DATA}/pairs_basic.csv")))
            .expect("Error reading test pairs");
        assert_eq!(pairs.len(), 7);
        assert_eq!(pairs[0], CidrPair::new("192.168.1.0/24", "192.168.1.128/25"));
        assert_eq!(pairs[2].cidr1, "abc");
    }

    #[test]
    fn test_reversed_columns() {
        let pairs = read_cidr_pairs(Path::new(&format!("{TEST_DATA}/pairs_reversed.csv")))
            .expect("Error reading reversed pairs");
        assert_eq!(pairs, vec![CidrPair::new("10.0.0.0/8", "10.1.0.0/16")]);
    }

    #[test]
    fn test_trims_fields() {
        let pairs = read_cidr_pairs(Path::new(&format!("{TEST_DATA}/pairs_spaced.csv")))
            .expect("Error reading spaced pairs");
        assert_eq!(pairs[0], CidrPair::new("10.0.0.0/24", "10.0.0.128/25"));
        assert_eq!(pairs[1], CidrPair::new("", "10.0.1.0/24"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_cidr_pairs(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, InputError::FileNotFound(_)));
    }

    #[test]
    fn test_wrong_extension() {
        let err = read_cidr_pairs(Path::new("Cargo.toml")).unwrap_err();
        assert!(matches!(err, InputError::WrongExtension(_)));
    }

    #[test]
    fn test_wrong_columns() {
        let err = read_cidr_pairs(Path::new(&format!("{TEST_DATA}/pairs_bad_columns.csv")))
            .unwrap_err();
        match err {
            InputError::Columns(found) => assert_eq!(found, vec!["CIDR1", "Target"]),
            other => panic!("Expected Columns error, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_column() {
        let err = read_cidr_pairs(Path::new(&format!("{TEST_DATA}/pairs_extra_column.csv")))
            .unwrap_err();
        assert!(matches!(err, InputError::Columns(_)));
    }
}
