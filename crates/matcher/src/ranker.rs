//! Deterministic ordering of match results.
use std::cmp::Ordering;

use crate::types::MatchResult;

/// Score used for recipes without a rating: the bottom of the scale.
pub const MISSING_QUALITY: f32 = 0.0;

/// Sort results best-first.
///
/// Keys, in priority order:
/// 1. `match_count`, descending
/// 2. quality score, descending, missing or non-finite treated as [`MISSING_QUALITY`]
/// 3. recipe id, ascending
/// 4. catalog position, ascending
///
/// The id key makes the order independent of how the catalog happens to be
/// arranged; the position key only separates recipes that share an id.
pub fn rank(mut results: Vec<MatchResult<'_>>) -> Vec<MatchResult<'_>> {
    results.sort_by(compare);
    results
}

pub fn compare(a: &MatchResult<'_>, b: &MatchResult<'_>) -> Ordering {
    b.match_count
        .cmp(&a.match_count)
        .then_with(|| quality(b).total_cmp(&quality(a)))
        .then_with(|| a.item.id.cmp(&b.item.id))
        .then_with(|| a.catalog_index.cmp(&b.catalog_index))
}

fn quality(result: &MatchResult<'_>) -> f32 {
    result
        .item
        .quality_score
        .filter(|score| score.is_finite())
        .unwrap_or(MISSING_QUALITY)
}
