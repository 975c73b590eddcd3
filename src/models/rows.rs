//! Input and output records for a conflict check run.

use serde::{Deserialize, Serialize, Serializer};

/// One input row: a source block and a candidate target block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CidrPair {
    #[serde(rename = "CIDR1")]
    pub cidr1: String,
    #[serde(rename = "CIDR2")]
    pub cidr2: String,
}

impl CidrPair {
    pub fn new(cidr1: &str, cidr2: &str) -> CidrPair {
        CidrPair {
            cidr1: cidr1.to_string(),
            cidr2: cidr2.to_string(),
        }
    }
}

fn serialize_flag<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *flag { "True" } else { "False" })
}

/// Result for a source block that parsed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ConflictRow {
    #[serde(rename = "source CIDR")]
    pub source_cidr: String,
    #[serde(rename = "isConflict", serialize_with = "serialize_flag")]
    pub is_conflict: bool,
    /// Sorted, de-duplicated target strings joined with `,`.
    #[serde(rename = "conflicting CIDRs")]
    pub conflicting_cidrs: String,
}

/// A source block that could not be parsed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorRow {
    #[serde(rename = "source CIDR")]
    pub source_cidr: String,
    pub error: String,
}

impl ConflictRow {
    pub const HEADERS: [&'static str; 3] = ["source CIDR", "isConflict", "conflicting CIDRs"];
}

impl ErrorRow {
    pub const HEADERS: [&'static str; 2] = ["source CIDR", "error"];
}

/// Everything the engine produces for one run, each list in input order.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ConflictReport {
    pub results: Vec<ConflictRow>,
    pub errors: Vec<ErrorRow>,
}

impl ConflictReport {
    pub fn conflict_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_conflict).count()
    }
}
