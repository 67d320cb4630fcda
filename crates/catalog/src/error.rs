//! Error types produced by the catalog crate.
//!
//! | Error | Category | Description |
//! |-------|----------|-------------|
//! | [`Io`](CatalogError::Io) | Provider | Catalog file could not be read |
//! | [`Json`](CatalogError::Json) | Provider | Catalog file is not a JSON recipe array |
//! | [`InvalidRecipe`](CatalogError::InvalidRecipe) | Admission | A field violates the recipe schema |
//! | [`EmptyRequiredTokens`](CatalogError::EmptyRequiredTokens) | Admission | No matchable ingredient left |
//! | [`DuplicateId`](CatalogError::DuplicateId) | Admission | Two recipes share an id in one snapshot |
//! | [`EmptyGenerationRequest`](CatalogError::EmptyGenerationRequest) | Generation | No ingredients to generate from |
//! | [`GenerationFailed`](CatalogError::GenerationFailed) | Generation | Service answered with an error body |
//! | [`InvalidConfig`](CatalogError::InvalidConfig) | Config | Catalog configuration rejected |
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid recipe {id}: {reason}")]
    InvalidRecipe { id: String, reason: String },

    #[error("recipe {0} has no required tokens after normalization")]
    EmptyRequiredTokens(String),

    #[error("duplicate recipe id in catalog: {0}")]
    DuplicateId(String),

    #[error("generation request has no ingredients")]
    EmptyGenerationRequest,

    #[error("generation service reported failure: {0}")]
    GenerationFailed(String),

    #[error("invalid catalog config: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    pub(crate) fn invalid(id: &str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidRecipe {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by the supplied data rather than the
    /// environment.
    pub fn is_data_error(&self) -> bool {
        !matches!(self, CatalogError::Io { .. })
    }
}
