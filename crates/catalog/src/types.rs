//! Core data model types for the catalog crate.
//!
//! A [`Recipe`] is the catalog item the matcher works on. Only four of its
//! fields take part in matching (`required_tokens`, `difficulty`,
//! `duration_minutes`, `quality_score`); the rest is carried so a catalog
//! snapshot round-trips the full recipe schema.
//!
//! Field names accept the legacy recipe-store spelling on input:
//!
//! | Field | Also accepted as |
//! |-------|------------------|
//! | `required_tokens` | `primary_ingredients` |
//! | `duration_minutes` | `prep_time_minutes` |
//! | `quality_score` | `rating` |
//!
//! ```rust
//! use catalog::{Difficulty, Recipe};
//!
//! let recipe: Recipe = serde_json::from_str(r#"{
//!     "id": "recipe-1",
//!     "title": "Leftover Rice Fried Rice",
//!     "difficulty": "Easy",
//!     "prep_time_minutes": 15,
//!     "rating": 4.5,
//!     "primary_ingredients": ["rice", "eggs", "onion", "garlic"]
//! }"#).unwrap();
//!
//! assert_eq!(recipe.difficulty, Difficulty::Easy);
//! assert_eq!(recipe.duration_minutes, 15);
//! assert_eq!(recipe.required_tokens.len(), 4);
//! ```
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed, ordered difficulty tiers.
///
/// Parsing is case-insensitive, both through [`FromStr`] and when
/// deserializing; serialization uses the capitalized form the recipe store
/// writes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known difficulty tier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown difficulty tier: {0:?}")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = UnknownDifficulty;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One numbered preparation step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstructionStep {
    pub step: u32,
    pub instruction: String,
}

/// Per-serving nutrition facts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Nutrition {
    pub calories: f32,
    pub protein: f32,
    pub carbs: f32,
    pub fat: f32,
    pub fiber: f32,
}

/// A catalog entry.
///
/// Catalog recipes are owned by the catalog provider and are read-only to the
/// matcher. Recipes that came through [`admit`](crate::admit) have
/// canonicalized, de-duplicated, non-empty `required_tokens`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Stable identifier, unique within a catalog snapshot.
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Defining ingredients used for matching.
    #[serde(alias = "primary_ingredients")]
    pub required_tokens: Vec<String>,
    pub difficulty: Difficulty,
    #[serde(alias = "prep_time_minutes")]
    pub duration_minutes: u32,
    /// Rating on the catalog's quality scale; `None` ranks as the minimum.
    #[serde(default, alias = "rating", skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Free-text ingredient lines as shown to the cook.
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<InstructionStep>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    /// Minimal recipe carrying only the fields matching looks at.
    pub fn new(
        id: impl Into<String>,
        required_tokens: impl IntoIterator<Item = impl Into<String>>,
        difficulty: Difficulty,
        duration_minutes: u32,
        quality_score: Option<f32>,
    ) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            required_tokens: required_tokens.into_iter().map(Into::into).collect(),
            difficulty,
            duration_minutes,
            quality_score,
            servings: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tags: Vec::new(),
            tips: None,
            image_url: None,
            nutrition: None,
        }
    }

    /// Builder-style title setter, mostly for tests and fixtures.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
