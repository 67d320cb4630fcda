//! Configuration for catalog admission.
//!
//! ```rust
//! use catalog::CatalogConfig;
//!
//! let config = CatalogConfig::default();
//! assert_eq!(config.max_quality, 5.0);
//! config.validate().expect("defaults are valid");
//! ```
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CatalogError;

/// Runtime configuration for admitting recipes into a catalog snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Remove control characters from ids and display strings.
    #[serde(default = "default_true")]
    pub strip_control_chars: bool,
    /// Upper bound of the quality scale; the lower bound is always 0.
    #[serde(default = "default_max_quality")]
    pub max_quality: f32,
    /// Namespace for deterministic ids assigned to generated recipes.
    #[serde(default = "default_id_namespace")]
    pub id_namespace: Uuid,
}

fn default_true() -> bool {
    true
}

fn default_max_quality() -> f32 {
    5.0
}

fn default_id_namespace() -> Uuid {
    Uuid::NAMESPACE_OID
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            strip_control_chars: default_true(),
            max_quality: default_max_quality(),
            id_namespace: default_id_namespace(),
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.max_quality.is_finite() || self.max_quality <= 0.0 {
            return Err(CatalogError::InvalidConfig(format!(
                "max_quality must be a positive finite number (got {})",
                self.max_quality
            )));
        }
        Ok(())
    }
}
