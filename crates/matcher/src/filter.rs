//! Hard constraints applied to relevance candidates.
//!
//! Every check is a pure predicate and they combine conjunctively, so the
//! order only matters for speed: the integer comparisons run before the
//! dietary token scan.
use std::collections::BTreeSet;

use catalog::{Difficulty, Recipe};

use crate::types::Query;

/// Whether `item` satisfies every constraint in `query`.
pub fn passes(item: &Recipe, query: &Query) -> bool {
    within_duration(item, query.max_duration_minutes)
        && matches_difficulty(item, query.difficulty)
        && !excluded_by_diet(item, &query.excluded_tokens)
}

/// [`passes`] with `item`'s required tokens already canonicalized, so a scan
/// can share one normalization between relevance and the dietary check.
pub fn passes_canonical(item: &Recipe, required: &[String], query: &Query) -> bool {
    within_duration(item, query.max_duration_minutes)
        && matches_difficulty(item, query.difficulty)
        && !any_excluded(required, &query.excluded_tokens)
}

pub fn within_duration(item: &Recipe, max_minutes: Option<u32>) -> bool {
    max_minutes.is_none_or(|max| item.duration_minutes <= max)
}

/// Exact tier equality; there is no "at most this hard" ordering.
pub fn matches_difficulty(item: &Recipe, tier: Option<Difficulty>) -> bool {
    tier.is_none_or(|tier| item.difficulty == tier)
}

/// Whether any required token equals an excluded token.
///
/// Unlike relevance this is whole-token equality, so "ground beef" is not
/// excluded by "beef". Configure the compound token in the dietary table when
/// it should be.
pub fn excluded_by_diet(item: &Recipe, excluded: &BTreeSet<String>) -> bool {
    if excluded.is_empty() {
        return false;
    }
    item.required_tokens
        .iter()
        .any(|token| excluded.contains(&canonical::normalize_token(token)))
}

/// Whether any canonical token in `required` is excluded.
pub fn any_excluded(required: &[String], excluded: &BTreeSet<String>) -> bool {
    required.iter().any(|token| excluded.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(tokens: &[&str], difficulty: Difficulty, minutes: u32) -> Recipe {
        Recipe::new("r", tokens.iter().copied(), difficulty, minutes, Some(4.0))
    }

    fn excluded(tokens: &[&str]) -> BTreeSet<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn duration_ceiling_is_inclusive() {
        let item = recipe(&["rice"], Difficulty::Easy, 30);
        assert!(within_duration(&item, None));
        assert!(within_duration(&item, Some(30)));
        assert!(!within_duration(&item, Some(29)));
    }

    #[test]
    fn difficulty_is_exact() {
        let item = recipe(&["rice"], Difficulty::Medium, 30);
        assert!(matches_difficulty(&item, None));
        assert!(matches_difficulty(&item, Some(Difficulty::Medium)));
        assert!(!matches_difficulty(&item, Some(Difficulty::Hard)));
        assert!(!matches_difficulty(&item, Some(Difficulty::Easy)));
    }

    #[test]
    fn dietary_exclusion_is_whole_token() {
        let meat = excluded(&["chicken", "beef"]);
        assert!(excluded_by_diet(&recipe(&["Chicken", "rice"], Difficulty::Easy, 10), &meat));
        assert!(!excluded_by_diet(&recipe(&["ground beef"], Difficulty::Easy, 10), &meat));
        assert!(!excluded_by_diet(&recipe(&["chicken"], Difficulty::Easy, 10), &BTreeSet::new()));
    }

    #[test]
    fn passes_requires_every_constraint() {
        let item = recipe(&["chicken", "onion"], Difficulty::Easy, 20);
        let mut query = Query::unconstrained(["onion"]);
        assert!(passes(&item, &query));

        query.max_duration_minutes = Some(25);
        query.difficulty = Some(Difficulty::Easy);
        assert!(passes(&item, &query));

        query.excluded_tokens = excluded(&["chicken"]);
        assert!(!passes(&item, &query));

        query.excluded_tokens.clear();
        query.max_duration_minutes = Some(15);
        assert!(!passes(&item, &query));
    }

    #[test]
    fn canonical_path_agrees_with_passes() {
        let item = recipe(&["Chicken", " Onion "], Difficulty::Easy, 20);
        let required = canonical::normalize_tokens(&item.required_tokens);
        let mut query = Query::unconstrained(["onion"]);
        assert!(passes_canonical(&item, &required, &query));

        query.excluded_tokens = excluded(&["chicken"]);
        assert!(!passes_canonical(&item, &required, &query));
        assert_eq!(passes_canonical(&item, &required, &query), passes(&item, &query));
        assert!(!any_excluded(&required, &excluded(&["beef"])));
    }
}
