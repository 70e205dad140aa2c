//! Ability catalog loader.

use std::path::Path;

use anyhow::Context;
use combat_core::{AbilityCatalog, AbilityDefinition};

use crate::loaders::{LoadResult, read_file};

const DEFAULT_ABILITIES: &str = include_str!("../../data/abilities.ron");

/// Loader for the ability catalog from RON files.
///
/// The file holds a list of [`AbilityDefinition`]s. Definitions are validated
/// as the catalog is built; a single bad entry rejects the whole file.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<AbilityCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load the catalog shipped with this crate.
    pub fn load_default() -> LoadResult<AbilityCatalog> {
        Self::parse(DEFAULT_ABILITIES).context("in embedded abilities.ron")
    }

    pub fn parse(content: &str) -> LoadResult<AbilityCatalog> {
        let definitions: Vec<AbilityDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability catalog RON: {}", e))?;

        let catalog = AbilityCatalog::from_definitions(definitions)
            .map_err(|e| anyhow::anyhow!("Invalid ability catalog: {}", e))?;

        tracing::debug!(abilities = catalog.len(), "loaded ability catalog");
        Ok(catalog)
    }
}
