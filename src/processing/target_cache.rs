//! Parsed target ranges, converted once per distinct CIDR2 string.

use crate::models::{AddressRange, CidrPair, ParseError};
use std::collections::HashSet;

/// A target string and its range, or `None` when it did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEntry {
    pub cidr: String,
    pub range: Option<AddressRange>,
}

/// Target ranges keyed by the literal CIDR2 string, in first-seen order.
///
/// Two strings for the same range (e.g. "10.0.0.0/8" and " 10.0.0.0/8")
/// are separate entries.
#[derive(Debug, Default)]
pub struct TargetCache {
    entries: Vec<TargetEntry>,
    conversions: usize,
}

impl TargetCache {
    /// Build the cache from every `cidr2` in `pairs`.
    pub fn build<F>(pairs: &[CidrPair], converter: &mut F) -> TargetCache
    where
        F: FnMut(&str) -> Result<AddressRange, ParseError>,
    {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut cache = TargetCache::default();

        for pair in pairs {
            if !seen.insert(pair.cidr2.as_str()) {
                log::trace!("target cache hit: {}", pair.cidr2);
                continue;
            }
            cache.conversions += 1;
            let range = match converter(&pair.cidr2) {
                Ok(range) => Some(range),
                Err(e) => {
                    log::debug!("Ignoring invalid target '{}': {e}", pair.cidr2);
                    None
                }
            };
            cache.entries.push(TargetEntry {
                cidr: pair.cidr2.clone(),
                range,
            });
        }

        log::debug!(
            "Target cache built: {} distinct targets ({} invalid) from {} rows",
            cache.entries.len(),
            cache.invalid_count(),
            pairs.len()
        );
        cache
    }

    pub fn get(&self, cidr: &str) -> Option<&TargetEntry> {
        self.entries.iter().find(|e| e.cidr == cidr)
    }

    /// Valid targets only; invalid entries are skipped.
    pub fn valid_ranges(&self) -> impl Iterator<Item = (&str, &AddressRange)> {
        self.entries
            .iter()
            .filter_map(|e| e.range.as_ref().map(|r| (e.cidr.as_str(), r)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn invalid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.range.is_none()).count()
    }

    /// How many times the converter was called while building.
    pub fn conversions(&self) -> usize {
        self.conversions
    }
}
