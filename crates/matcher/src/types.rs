use std::collections::{BTreeMap, BTreeSet};

use catalog::{Difficulty, Recipe};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const VEGETARIAN_EXCLUDES: &[&str] = &["chicken", "beef", "pork", "fish", "meat"];
const VEGAN_EXTRA_EXCLUDES: &[&str] = &["cheese", "eggs"];

/// A single recommendation request.
///
/// This is the loose, serde-friendly form callers build or receive over the
/// wire. [`MatchRequest::validate`] turns it into a typed [`Query`]; the engine
/// does that before looking at the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchRequest {
    /// Ingredients the user has on hand.
    pub ingredients: Vec<String>,
    /// Required difficulty tier. Absent, empty, or `"any"` means no filter.
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Upper bound on preparation time. Must be positive when present.
    #[serde(default)]
    pub max_duration_minutes: Option<i64>,
    /// Restriction keywords looked up in the engine's [`DietaryTable`].
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

impl MatchRequest {
    pub fn new(ingredients: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn with_max_duration(mut self, minutes: i64) -> Self {
        self.max_duration_minutes = Some(minutes);
        self
    }

    pub fn with_restriction(mut self, keyword: impl Into<String>) -> Self {
        self.dietary_restrictions.push(keyword.into());
        self
    }

    /// Add every restriction keyword of `table` mentioned in free text such as
    /// `"Vegetarian, please"`.
    pub fn with_restriction_text(mut self, text: &str, table: &DietaryTable) -> Self {
        for keyword in table.keywords_in(text) {
            if !self.dietary_restrictions.contains(&keyword) {
                self.dietary_restrictions.push(keyword);
            }
        }
        self
    }

    /// Check the request and resolve it into a [`Query`].
    ///
    /// Ingredients that normalize to nothing are dropped; an empty token would
    /// be a substring of every required token. Blank restriction keywords are
    /// ignored, unknown ones are rejected.
    pub fn validate(&self, dietary: &DietaryTable) -> Result<Query, MatchError> {
        let user_tokens = canonical::normalize_tokens(&self.ingredients);
        if user_tokens.is_empty() {
            return Err(MatchError::EmptyQuery);
        }

        let difficulty = match self.difficulty.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(tier) if tier.eq_ignore_ascii_case("any") => None,
            Some(tier) => Some(
                tier.parse::<Difficulty>()
                    .map_err(|err| MatchError::InvalidConstraint(err.to_string()))?,
            ),
        };

        let max_duration_minutes = match self.max_duration_minutes {
            None => None,
            Some(minutes) if minutes <= 0 => {
                return Err(MatchError::InvalidConstraint(format!(
                    "max_duration_minutes must be positive, got {minutes}"
                )));
            }
            Some(minutes) => Some(u32::try_from(minutes).unwrap_or(u32::MAX)),
        };

        let mut excluded_tokens = BTreeSet::new();
        for keyword in &self.dietary_restrictions {
            if keyword.trim().is_empty() {
                continue;
            }
            let tokens = dietary.excluded_tokens(keyword).ok_or_else(|| {
                MatchError::InvalidConstraint(format!("unknown dietary restriction: {keyword:?}"))
            })?;
            excluded_tokens.extend(tokens.iter().cloned());
        }

        Ok(Query {
            user_tokens,
            difficulty,
            max_duration_minutes,
            excluded_tokens,
        })
    }
}

/// A validated request: canonical user tokens and resolved constraints.
///
/// Only [`MatchRequest::validate`] builds one, so the user tokens are always
/// canonical and non-empty and the excluded tokens are canonical too.
///
/// ```compile_fail
/// let query = matcher::Query {
///     user_tokens: Vec::new(),
///     difficulty: None,
///     max_duration_minutes: None,
///     excluded_tokens: Default::default(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub(crate) user_tokens: Vec<String>,
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) max_duration_minutes: Option<u32>,
    /// Union of the excluded tokens of every requested restriction.
    pub(crate) excluded_tokens: BTreeSet<String>,
}

impl Query {
    /// Query with no constraints. `user_tokens` are normalized here.
    #[cfg(test)]
    pub(crate) fn unconstrained(user_tokens: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            user_tokens: canonical::normalize_tokens(user_tokens),
            difficulty: None,
            max_duration_minutes: None,
            excluded_tokens: BTreeSet::new(),
        }
    }

    /// Normalized, de-duplicated, never empty.
    pub fn user_tokens(&self) -> &[String] {
        &self.user_tokens
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn max_duration_minutes(&self) -> Option<u32> {
        self.max_duration_minutes
    }

    pub fn excluded_tokens(&self) -> &BTreeSet<String> {
        &self.excluded_tokens
    }
}

/// One ranked recommendation.
///
/// Borrows the recipe from the caller's catalog; the engine never copies it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub item: &'a Recipe,
    /// Number of required tokens that overlapped a user token. Always >= 1.
    pub match_count: usize,
    /// Position of `item` in the catalog slice the query ran over.
    #[serde(skip)]
    pub catalog_index: usize,
}

/// Errors produced by the matching layer.
///
/// Finding nothing is not an error; the engine returns an empty list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    /// No usable ingredient in the request.
    #[error("query has no ingredients")]
    EmptyQuery,
    /// A constraint value is structurally invalid.
    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),
}

impl MatchError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            MatchError::EmptyQuery => "empty_query",
            MatchError::InvalidConstraint(_) => "invalid_constraint",
        }
    }
}

/// Restriction keyword to excluded-token mapping.
///
/// Keywords and tokens are normalized on construction, so lookups are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DietaryTable {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl DietaryTable {
    /// Build a table from `(keyword, excluded tokens)` pairs. Repeated
    /// keywords merge their token sets.
    pub fn new<I, K, T, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsRef<str>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (keyword, tokens) in entries {
            let keyword = canonical::normalize_token(keyword.as_ref());
            if keyword.is_empty() {
                continue;
            }
            table
                .entry(keyword)
                .or_default()
                .extend(canonical::normalize_tokens(tokens));
        }
        Self { entries: table }
    }

    /// A table that knows no restrictions.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn excluded_tokens(&self, keyword: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(&canonical::normalize_token(keyword))
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Every known keyword that appears somewhere in `text`.
    pub fn keywords_in(&self, text: &str) -> Vec<String> {
        let text = canonical::normalize_token(text);
        self.entries
            .keys()
            .filter(|keyword| text.contains(keyword.as_str()))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DietaryTable {
    fn default() -> Self {
        let vegan = VEGETARIAN_EXCLUDES.iter().chain(VEGAN_EXTRA_EXCLUDES);
        Self::new([
            ("vegetarian", VEGETARIAN_EXCLUDES.iter().collect::<Vec<_>>()),
            ("vegan", vegan.collect::<Vec<_>>()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dietary_table_matches_known_restrictions() {
        let table = DietaryTable::default();
        assert_eq!(table.len(), 2);

        let vegetarian = table.excluded_tokens("Vegetarian").expect("vegetarian");
        assert_eq!(vegetarian.len(), 5);
        assert!(vegetarian.contains("meat"));

        let vegan = table.excluded_tokens("vegan").expect("vegan");
        assert!(vegan.is_superset(vegetarian));
        assert!(vegan.contains("cheese"));
        assert!(vegan.contains("eggs"));
    }

    #[test]
    fn custom_table_normalizes_and_merges() {
        let table = DietaryTable::new([
            (" Pescatarian ", vec!["Chicken", "BEEF"]),
            ("pescatarian", vec!["pork"]),
            ("  ", vec!["ignored"]),
        ]);
        assert_eq!(table.keywords().collect::<Vec<_>>(), vec!["pescatarian"]);
        let tokens = table.excluded_tokens("PESCATARIAN").unwrap();
        assert_eq!(
            tokens.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["beef", "chicken", "pork"]
        );
    }

    #[test]
    fn keywords_in_free_text() {
        let table = DietaryTable::default();
        assert_eq!(table.keywords_in("Vegetarian please"), vec!["vegetarian"]);
        assert_eq!(table.keywords_in("strictly VEGAN"), vec!["vegan"]);
        assert!(table.keywords_in("no nuts").is_empty());
    }

    #[test]
    fn restriction_text_does_not_duplicate_keywords() {
        let table = DietaryTable::default();
        let request = MatchRequest::new(["rice"])
            .with_restriction("vegan")
            .with_restriction_text("vegan and vegetarian", &table);
        assert_eq!(request.dietary_restrictions, vec!["vegan", "vegetarian"]);
    }

    #[test]
    fn validate_normalizes_and_drops_blank_tokens() {
        let query = MatchRequest::new([" Eggs", "", "eggs ", "ONIONS", "   "])
            .validate(&DietaryTable::default())
            .unwrap();
        assert_eq!(query.user_tokens, vec!["eggs", "onions"]);
        assert_eq!(query.difficulty, None);
        assert_eq!(query.max_duration_minutes, None);
        assert!(query.excluded_tokens.is_empty());
    }

    #[test]
    fn validate_rejects_empty_ingredients() {
        let table = DietaryTable::default();
        assert_eq!(
            MatchRequest::default().validate(&table),
            Err(MatchError::EmptyQuery)
        );
        assert_eq!(
            MatchRequest::new(["", "  "]).validate(&table),
            Err(MatchError::EmptyQuery)
        );
    }

    #[test]
    fn empty_query_wins_over_invalid_constraints() {
        let request = MatchRequest::new(Vec::<String>::new()).with_max_duration(-5);
        assert_eq!(
            request.validate(&DietaryTable::default()),
            Err(MatchError::EmptyQuery)
        );
    }

    #[test]
    fn difficulty_any_and_blank_mean_no_filter() {
        let table = DietaryTable::default();
        for tier in ["any", "ANY", "", "  "] {
            let query = MatchRequest::new(["rice"])
                .with_difficulty(tier)
                .validate(&table)
                .unwrap();
            assert_eq!(query.difficulty, None, "tier {tier:?}");
        }
        let query = MatchRequest::new(["rice"])
            .with_difficulty("medium")
            .validate(&table)
            .unwrap();
        assert_eq!(query.difficulty, Some(Difficulty::Medium));
    }

    #[test]
    fn unknown_difficulty_is_invalid() {
        let err = MatchRequest::new(["rice"])
            .with_difficulty("extreme")
            .validate(&DietaryTable::default())
            .unwrap_err();
        match err {
            MatchError::InvalidConstraint(msg) => assert!(msg.contains("extreme")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_positive_duration_is_invalid() {
        let table = DietaryTable::default();
        for minutes in [0, -1, i64::MIN] {
            let err = MatchRequest::new(["rice"])
                .with_max_duration(minutes)
                .validate(&table)
                .unwrap_err();
            assert!(matches!(err, MatchError::InvalidConstraint(ref msg) if msg.contains("max_duration_minutes")));
        }
        let query = MatchRequest::new(["rice"])
            .with_max_duration(i64::MAX)
            .validate(&table)
            .unwrap();
        assert_eq!(query.max_duration_minutes, Some(u32::MAX));
    }

    #[test]
    fn restrictions_union_and_unknown_keywords() {
        let table = DietaryTable::default();
        let query = MatchRequest::new(["rice"])
            .with_restriction("Vegetarian")
            .with_restriction("vegan")
            .with_restriction(" ")
            .validate(&table)
            .unwrap();
        assert_eq!(query.excluded_tokens.len(), 7);

        let err = MatchRequest::new(["rice"])
            .with_restriction("keto")
            .validate(&table)
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_constraint");
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let request: MatchRequest =
            serde_json::from_str(r#"{"ingredients": ["rice", "eggs"]}"#).unwrap();
        assert_eq!(request, MatchRequest::new(["rice", "eggs"]));
    }
}
