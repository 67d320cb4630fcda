//! Immutable catalog snapshots and the providers that produce them.
//!
//! The matcher never caches a catalog. Callers ask a [`CatalogProvider`] for a
//! fresh [`Catalog`] whenever they want up-to-date data; holding on to an old
//! snapshot is always safe because snapshots are never mutated.
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::types::Recipe;

/// Read-only, shareable set of admitted recipes.
///
/// Cloning is an `Arc` bump, so a snapshot can be handed to many concurrent
/// queries.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Arc<[Recipe]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            recipes: Arc::from(Vec::new()),
        }
    }
}

impl Catalog {
    /// Admit every recipe and build a snapshot.
    ///
    /// Fails on the first recipe that does not pass admission, or on a
    /// duplicate id.
    pub fn from_recipes(recipes: Vec<Recipe>, cfg: &CatalogConfig) -> Result<Self, CatalogError> {
        cfg.validate()?;
        let mut seen: HashSet<String> = HashSet::with_capacity(recipes.len());
        let mut admitted = Vec::with_capacity(recipes.len());
        for raw in recipes {
            let recipe = crate::admit(raw, cfg)?;
            if !seen.insert(recipe.id.clone()) {
                return Err(CatalogError::DuplicateId(recipe.id));
            }
            admitted.push(recipe);
        }
        info!(recipes = admitted.len(), "catalog_loaded");
        Ok(Self {
            recipes: admitted.into(),
        })
    }

    /// Parse a JSON array of recipes and admit it.
    pub fn from_json(json: &str, cfg: &CatalogConfig) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::from_recipes(recipes, cfg)
    }

    /// A new snapshot with one more recipe appended.
    ///
    /// This is how a persisted generated recipe joins the catalog; `self` is
    /// left untouched.
    pub fn with_recipe(&self, recipe: Recipe, cfg: &CatalogConfig) -> Result<Self, CatalogError> {
        cfg.validate()?;
        let recipe = crate::admit(recipe, cfg)?;
        if self.get(&recipe.id).is_some() {
            return Err(CatalogError::DuplicateId(recipe.id));
        }
        let mut recipes = self.recipes.to_vec();
        recipes.push(recipe);
        Ok(Self {
            recipes: recipes.into(),
        })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }
}

impl AsRef<[Recipe]> for Catalog {
    fn as_ref(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

/// Source of catalog snapshots.
pub trait CatalogProvider: Send + Sync {
    /// Produce the current snapshot.
    fn snapshot(&self) -> Result<Catalog, CatalogError>;
}

/// Provider over a fixed in-memory snapshot.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    catalog: Catalog,
}

impl StaticCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogProvider for StaticCatalog {
    fn snapshot(&self) -> Result<Catalog, CatalogError> {
        Ok(self.catalog.clone())
    }
}

/// Provider that re-reads a JSON recipe array from disk on every snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
    cfg: CatalogConfig,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>, cfg: CatalogConfig) -> Self {
        Self {
            path: path.into(),
            cfg,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for JsonFileCatalog {
    fn snapshot(&self) -> Result<Catalog, CatalogError> {
        let content = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        Catalog::from_json(&content, &self.cfg)
    }
}
