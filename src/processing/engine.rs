//! Conflict detection across a list of CIDR pairs.
//!
//! Every source block (CIDR1) is checked against every distinct target
//! block (CIDR2) in the input, not only the one on its own row.

use super::target_cache::TargetCache;
use crate::models::{
    convert, AddressRange, CidrPair, ConflictReport, ConflictRow, ErrorRow, ParseError,
};
use itertools::Itertools;

/// Run the conflict check with the standard converter.
pub fn run(pairs: &[CidrPair]) -> ConflictReport {
    run_with(pairs, convert)
}

/// Run the conflict check with a caller-supplied converter.
///
/// A source that fails to convert becomes an [`ErrorRow`]; a target that
/// fails to convert is skipped silently. This never fails as a whole.
pub fn run_with<F>(pairs: &[CidrPair], mut converter: F) -> ConflictReport
where
    F: FnMut(&str) -> Result<AddressRange, ParseError>,
{
    log::info!("#Start conflict check for {} rows", pairs.len());
    let cache = TargetCache::build(pairs, &mut converter);
    let mut report = ConflictReport::default();

    for (i, pair) in pairs.iter().enumerate() {
        let source = match converter(&pair.cidr1) {
            Ok(range) => range,
            Err(e) => {
                log::warn!("Row {i}: skipping source '{}': {e}", pair.cidr1);
                report.errors.push(ErrorRow {
                    source_cidr: pair.cidr1.clone(),
                    error: e.to_string(),
                });
                continue;
            }
        };

        let matches: Vec<&str> = cache
            .valid_ranges()
            .filter(|(_, target)| super::overlaps(&source, target))
            .map(|(cidr, _)| cidr)
            .sorted()
            .dedup()
            .collect();

        log::trace!("Row {i}: {} overlaps {:?}", pair.cidr1, matches);
        report.results.push(ConflictRow {
            source_cidr: pair.cidr1.clone(),
            is_conflict: !matches.is_empty(),
            conflicting_cidrs: matches.join(","),
        });
    }

    log::info!(
        "Conflict check done: {} results ({} conflicts), {} errors, {} target conversions",
        report.results.len(),
        report.conflict_count(),
        report.errors.len(),
        cache.conversions()
    );
    report
}
