//! Intake for recipes produced by the external recipe-generation service.
//!
//! The service is asked for "a recipe using these leftovers" and answers with
//! one recipe in the catalog's display schema, but without an id and without
//! the `primary_ingredients` the matcher relies on. This module fills those
//! gaps so the result can be admitted like any other catalog recipe:
//!
//! - the id is a UUIDv5 over the title and required tokens, so the same
//!   generated recipe always gets the same id;
//! - required tokens default to the ingredients that were asked for;
//! - an answer that is not recipe JSON at all is replaced by
//!   [`fallback_recipe`], a templated recipe built from the request.
//!
//! Nothing here talks to the network; callers hand over the response body.
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::types::{Difficulty, InstructionStep, Recipe};

const FALLBACK_PREP_MINUTES: u32 = 30;
const FALLBACK_SERVINGS: u32 = 4;

/// What the generation service is asked for.
///
/// Form fields the user left alone arrive as `""`; they read as absent, and
/// so does a difficulty of `"any"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub ingredients: Vec<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub dietary_restrictions: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_difficulty",
        skip_serializing_if = "Option::is_none"
    )]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
}

impl GenerationRequest {
    pub fn new(ingredients: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Ingredients with blanks removed, in request order.
    fn cleaned_ingredients(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.trim())
            .filter(|ingredient| !ingredient.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}

fn optional_difficulty<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    match blank_as_none(deserializer)? {
        None => Ok(None),
        Some(tier) if tier.trim().eq_ignore_ascii_case("any") => Ok(None),
        Some(tier) => tier.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// A recipe as the generation service writes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedRecipe {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub prep_time_minutes: u32,
    #[serde(default)]
    pub servings: Option<u32>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<InstructionStep>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tips: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub primary_ingredients: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Envelope {
        recipe: GeneratedRecipe,
    },
    Failure {
        error: String,
        #[serde(default)]
        details: Option<String>,
    },
    Bare(GeneratedRecipe),
}

/// Turn a generation-service response body into an admitted recipe.
///
/// Accepts either the `{"recipe": {...}}` envelope or a bare recipe object.
/// An `{"error": ...}` body is reported as [`CatalogError::GenerationFailed`];
/// anything else that does not parse falls back to [`fallback_recipe`].
pub fn admit_generated(
    request: &GenerationRequest,
    body: &str,
    cfg: &CatalogConfig,
) -> Result<Recipe, CatalogError> {
    let requested = request.cleaned_ingredients();
    if requested.is_empty() {
        return Err(CatalogError::EmptyGenerationRequest);
    }

    let generated = match serde_json::from_str::<GenerationResponse>(body) {
        Ok(GenerationResponse::Envelope { recipe }) | Ok(GenerationResponse::Bare(recipe)) => {
            recipe
        }
        Ok(GenerationResponse::Failure { error, details }) => {
            let message = match details {
                Some(details) => format!("{error}: {details}"),
                None => error,
            };
            return Err(CatalogError::GenerationFailed(message));
        }
        Err(err) => {
            warn!(error = %err, "generated_recipe_unparseable");
            return crate::admit(build_fallback(request, &requested, cfg), cfg);
        }
    };

    let recipe = into_recipe(generated, &requested, cfg);
    info!(recipe_id = %recipe.id, title = %recipe.title, "generated_recipe_received");
    crate::admit(recipe, cfg)
}

/// The templated recipe used when the service answer is unusable.
pub fn fallback_recipe(
    request: &GenerationRequest,
    cfg: &CatalogConfig,
) -> Result<Recipe, CatalogError> {
    let requested = request.cleaned_ingredients();
    if requested.is_empty() {
        return Err(CatalogError::EmptyGenerationRequest);
    }
    crate::admit(build_fallback(request, &requested, cfg), cfg)
}

fn build_fallback(request: &GenerationRequest, requested: &[String], cfg: &CatalogConfig) -> Recipe {
    let listed = requested.join(", ");
    let steps = [
        format!("Prepare your {listed} by cleaning and chopping as needed."),
        "Heat oil in a large pan and add your ingredients.".to_string(),
        "Cook until heated through and flavors are combined.".to_string(),
        "Season to taste and serve hot.".to_string(),
    ];

    let generated = GeneratedRecipe {
        title: format!("Leftover {} Creation", requested[0]),
        description: format!("A delicious recipe using {listed}"),
        prep_time_minutes: request.prep_time.unwrap_or(FALLBACK_PREP_MINUTES),
        servings: Some(FALLBACK_SERVINGS),
        difficulty: request.difficulty.unwrap_or(Difficulty::Medium),
        ingredients: requested.to_vec(),
        instructions: steps
            .into_iter()
            .zip(1..)
            .map(|(instruction, step)| InstructionStep { step, instruction })
            .collect(),
        tags: vec!["leftovers".into(), "quick".into(), "easy".into()],
        tips: Some(
            "Feel free to add your favorite seasonings and spices to enhance flavor!".into(),
        ),
        rating: None,
        image_url: None,
        primary_ingredients: None,
    };
    into_recipe(generated, requested, cfg)
}

fn into_recipe(generated: GeneratedRecipe, requested: &[String], cfg: &CatalogConfig) -> Recipe {
    let required_tokens = match generated.primary_ingredients {
        Some(tokens) if !canonical::normalize_tokens(&tokens).is_empty() => tokens,
        _ => requested.to_vec(),
    };
    let id = derive_recipe_id(cfg, &generated.title, &required_tokens);

    Recipe {
        id,
        title: generated.title,
        description: generated.description,
        required_tokens,
        difficulty: generated.difficulty,
        duration_minutes: generated.prep_time_minutes,
        quality_score: generated.rating,
        servings: generated.servings,
        ingredients: generated.ingredients,
        instructions: generated.instructions,
        tags: generated.tags,
        tips: generated.tips,
        image_url: generated.image_url,
        nutrition: None,
    }
}

/// UUIDv5 over the canonical title and tokens, NUL-separated to avoid
/// collisions between different splits of the same bytes.
fn derive_recipe_id(cfg: &CatalogConfig, title: &str, required_tokens: &[String]) -> String {
    let mut material = canonical::normalize_token(title).into_bytes();
    for token in canonical::normalize_tokens(required_tokens) {
        material.push(0);
        material.extend_from_slice(token.as_bytes());
    }
    format!(
        "generated-{}",
        uuid::Uuid::new_v5(&cfg.id_namespace, &material)
    )
}
