use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::snapshot::Catalog;

const SEED_RECIPES: &str = include_str!("../data/seed_recipes.json");

/// The bundled leftover-friendly starter catalog.
pub fn seed_catalog(cfg: &CatalogConfig) -> Result<Catalog, CatalogError> {
    Catalog::from_json(SEED_RECIPES, cfg)
}
