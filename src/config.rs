//! YAML Configuration File Support for Larder
//!
//! Loads the catalog source, the dietary restriction table and logging
//! settings from a single YAML file.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # Larder Configuration
//! version: "1.0"
//!
//! catalog:
//!   path: "recipes.json"   # omit to use the bundled seed catalog
//!   max_quality: 5.0
//!   strip_control_chars: true
//!
//! dietary:                 # replaces the built-in table when present
//!   vegetarian: [chicken, beef, ground beef, pork, fish, meat]
//!   vegan: [chicken, beef, ground beef, pork, fish, meat, cheese, eggs, butter]
//!
//! logging:
//!   level: "info"
//!   json: false
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use catalog::{
    CatalogConfig, CatalogError, CatalogProvider, JsonFileCatalog, StaticCatalog, seed_catalog,
};
use matcher::{DietaryTable, Engine};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct LarderConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Catalog source and admission settings
    #[serde(default)]
    pub catalog: CatalogYamlConfig,

    /// Restriction keyword to excluded ingredient tokens. Empty keeps the
    /// built-in vegetarian/vegan table.
    #[serde(default)]
    pub dietary: BTreeMap<String, Vec<String>>,

    /// Log output settings for the binary
    #[serde(default)]
    pub logging: LoggingYamlConfig,
}

impl LarderConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: LarderConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.catalog.validate()?;
        self.logging.validate()?;

        for (keyword, tokens) in &self.dietary {
            if canonical::normalize_token(keyword).is_empty() {
                return Err(ConfigLoadError::Validation(
                    "dietary keywords must not be empty".to_string(),
                ));
            }
            if canonical::normalize_tokens(tokens).is_empty() {
                return Err(ConfigLoadError::Validation(format!(
                    "dietary.{keyword} must list at least one ingredient"
                )));
            }
        }

        Ok(())
    }

    /// The dietary table the engine should use.
    pub fn to_dietary_table(&self) -> DietaryTable {
        if self.dietary.is_empty() {
            DietaryTable::default()
        } else {
            DietaryTable::new(&self.dietary)
        }
    }

    /// An engine wired with this configuration's dietary table.
    pub fn engine(&self) -> Engine {
        Engine::new(self.to_dietary_table())
    }

    /// The configured catalog source: the JSON file at `catalog.path`, or the
    /// bundled seed catalog.
    pub fn catalog_provider(&self) -> Result<Box<dyn CatalogProvider>, CatalogError> {
        let cfg = self.catalog.to_catalog_config();
        match &self.catalog.path {
            Some(path) => Ok(Box::new(JsonFileCatalog::new(path.clone(), cfg))),
            None => Ok(Box::new(StaticCatalog::new(seed_catalog(&cfg)?))),
        }
    }
}

impl Default for LarderConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            catalog: CatalogYamlConfig::default(),
            dietary: BTreeMap::new(),
            logging: LoggingYamlConfig::default(),
        }
    }
}

/// Catalog YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogYamlConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_max_quality")]
    pub max_quality: f32,

    #[serde(default = "true_value")]
    pub strip_control_chars: bool,
}

impl CatalogYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_catalog_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("catalog: {err}")))?;
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigLoadError::Validation(
                    "catalog.path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn to_catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            strip_control_chars: self.strip_control_chars,
            max_quality: self.max_quality,
            ..CatalogConfig::default()
        }
    }
}

impl Default for CatalogYamlConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_quality: default_max_quality(),
            strip_control_chars: true,
        }
    }
}

/// Logging YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingYamlConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl LoggingYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingYamlConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn true_value() -> bool {
    true
}
fn default_max_quality() -> f32 {
    5.0
}
fn default_log_level() -> String {
    "info".to_string()
}
