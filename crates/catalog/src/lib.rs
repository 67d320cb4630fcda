//! Larder catalog layer
//!
//! Recipes enter the matcher's world here. The catalog crate owns the recipe
//! data model, checks raw recipes against the schema, and hands out immutable
//! snapshots that the matcher reads without ever mutating.
//!
//! ## What we do here
//!
//! - **Validate and normalize recipes** - ids and titles must be present,
//!   required tokens are canonicalized and de-duplicated, durations are
//!   positive, ratings sit on the configured scale.
//! - **Build snapshots** - [`Catalog`] is a cheap-to-clone, read-only view;
//!   duplicate ids inside one snapshot are rejected.
//! - **Provide catalogs** - [`CatalogProvider`] implementations for in-memory
//!   catalogs, JSON files, and the bundled [`seed_catalog`].
//! - **Take in generated recipes** - [`admit_generated`] turns a
//!   recipe-generation service response into an ordinary catalog recipe.
//! - **Log everything** - structured events via tracing.
//!
//! ## Example
//!
//! ```
//! use catalog::{admit, CatalogConfig, Difficulty, Recipe};
//!
//! let raw = Recipe::new("omelette", ["  Eggs ", "cheese", "EGGS"], Difficulty::Easy, 10, Some(4.2))
//!     .with_title("Cheese Omelette");
//! let recipe = admit(raw, &CatalogConfig::default()).unwrap();
//!
//! assert_eq!(recipe.required_tokens, vec!["eggs", "cheese"]);
//! ```
use std::time::Instant;

use tracing::{debug, warn};

mod config;
mod error;
pub mod generated;
mod sanitize;
mod seed;
mod snapshot;
mod types;

use crate::sanitize::{sanitize_lines, sanitize_optional_string, sanitize_required_field};

pub use crate::config::CatalogConfig;
pub use crate::error::CatalogError;
pub use crate::generated::{admit_generated, fallback_recipe, GeneratedRecipe, GenerationRequest};
pub use crate::seed::seed_catalog;
pub use crate::snapshot::{Catalog, CatalogProvider, JsonFileCatalog, StaticCatalog};
pub use crate::types::{Difficulty, InstructionStep, Nutrition, Recipe, UnknownDifficulty};

/// Admit a raw recipe: validates fields and returns the normalized recipe.
pub fn admit(raw: Recipe, cfg: &CatalogConfig) -> Result<Recipe, CatalogError> {
    let start = Instant::now();
    let id_hint = raw.id.clone();

    match admit_inner(raw, cfg) {
        Ok(recipe) => {
            debug!(
                recipe_id = %recipe.id,
                required_tokens = recipe.required_tokens.len(),
                elapsed_micros = start.elapsed().as_micros(),
                "catalog_admit_success"
            );
            Ok(recipe)
        }
        Err(err) => {
            warn!(
                recipe_id = %id_hint,
                error = %err,
                elapsed_micros = start.elapsed().as_micros(),
                "catalog_admit_failure"
            );
            Err(err)
        }
    }
}

fn admit_inner(raw: Recipe, cfg: &CatalogConfig) -> Result<Recipe, CatalogError> {
    cfg.validate()?;
    let strip = cfg.strip_control_chars;
    let Recipe {
        id,
        title,
        description,
        required_tokens,
        difficulty,
        duration_minutes,
        quality_score,
        servings,
        ingredients,
        instructions,
        tags,
        tips,
        image_url,
        nutrition,
    } = raw;

    let id = sanitize_optional_string(Some(id), strip)
        .ok_or_else(|| CatalogError::invalid("<unnamed>", "id empty"))?;
    let title = sanitize_required_field(&id, "title", title, strip)?;

    let required_tokens = canonical::normalize_tokens(&required_tokens);
    if required_tokens.is_empty() {
        return Err(CatalogError::EmptyRequiredTokens(id));
    }

    if duration_minutes == 0 {
        return Err(CatalogError::invalid(&id, "duration_minutes must be positive"));
    }

    if let Some(score) = quality_score {
        if !score.is_finite() || score < 0.0 || score > cfg.max_quality {
            return Err(CatalogError::invalid(
                &id,
                format!(
                    "quality_score {score} outside [0, {}]",
                    cfg.max_quality
                ),
            ));
        }
    }

    if servings == Some(0) {
        return Err(CatalogError::invalid(&id, "servings must be positive"));
    }

    Ok(Recipe {
        id,
        title,
        description: sanitize_optional_string(Some(description), strip).unwrap_or_default(),
        required_tokens,
        difficulty,
        duration_minutes,
        quality_score,
        servings,
        ingredients: sanitize_lines(ingredients, strip),
        instructions,
        tags: sanitize_lines(tags, strip),
        tips: sanitize_optional_string(tips, strip),
        image_url: sanitize_optional_string(image_url, strip),
        nutrition,
    })
}
