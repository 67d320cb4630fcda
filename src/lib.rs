//! Workspace umbrella crate for Larder, the leftover-ingredient recipe matcher.
//!
//! This crate stitches the catalog and matcher layers together so callers can
//! go from "catalog source + request" to ranked recommendations with a single
//! call, and loads the whole setup from YAML (see [`LarderConfig`]).

pub mod config;

pub use canonical::{collapse_whitespace, normalize_token, normalize_tokens};
pub use catalog::{
    Catalog, CatalogConfig, CatalogError, CatalogProvider, Difficulty, GeneratedRecipe,
    GenerationRequest, InstructionStep, JsonFileCatalog, Nutrition, Recipe, StaticCatalog, admit,
    admit_generated, fallback_recipe, seed_catalog,
};
pub use matcher::{
    DietaryTable, Engine, MatchError, MatchMetrics, MatchRequest, MatchResult, Query,
    set_match_metrics,
};

pub use crate::config::{CatalogYamlConfig, ConfigLoadError, LarderConfig, LoggingYamlConfig};

use std::error::Error;
use std::fmt;

use serde::Serialize;
use tracing::debug;

/// Errors that can occur while producing recommendations end-to-end.
#[derive(Debug)]
pub enum PipelineError {
    Catalog(CatalogError),
    Match(MatchError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Catalog(err) => write!(f, "catalog failure: {err}"),
            PipelineError::Match(err) => write!(f, "match failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Catalog(err) => Some(err),
            PipelineError::Match(err) => Some(err),
        }
    }
}

impl From<CatalogError> for PipelineError {
    fn from(value: CatalogError) -> Self {
        PipelineError::Catalog(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

/// An owned, ranked recommendation.
///
/// [`MatchResult`] borrows from a catalog snapshot; this outlives it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub match_count: usize,
    pub recipe: Recipe,
}

impl Recommendation {
    fn from_result(rank: usize, result: &MatchResult<'_>) -> Self {
        Self {
            rank,
            match_count: result.match_count,
            recipe: result.item.clone(),
        }
    }
}

/// Take a fresh snapshot from `provider` and rank it for `request`.
///
/// The request is validated through the engine before the snapshot is taken,
/// so a bad request never touches the catalog source and is still logged and
/// counted as a rejection.
pub fn recommend(
    provider: &dyn CatalogProvider,
    engine: &Engine,
    request: &MatchRequest,
) -> Result<Vec<Recommendation>, PipelineError> {
    engine.validate(request)?;
    let snapshot = provider.snapshot()?;
    let results = engine.query(snapshot.recipes(), request)?;
    debug!(
        catalog_size = snapshot.len(),
        results = results.len(),
        "recommend_complete"
    );
    Ok(results
        .iter()
        .enumerate()
        .map(|(idx, result)| Recommendation::from_result(idx + 1, result))
        .collect())
}

/// Like [`recommend`] but keeps only the top result.
pub fn recommend_best(
    provider: &dyn CatalogProvider,
    engine: &Engine,
    request: &MatchRequest,
) -> Result<Option<Recommendation>, PipelineError> {
    Ok(recommend(provider, engine, request)?.into_iter().next())
}

/// Build everything from a config and run one request.
pub fn recommend_with_config(
    config: &LarderConfig,
    request: &MatchRequest,
) -> Result<Vec<Recommendation>, PipelineError> {
    let provider = config.catalog_provider()?;
    recommend(provider.as_ref(), &config.engine(), request)
}
