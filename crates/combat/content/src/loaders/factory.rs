//! Content factory for loading every combat data file from one directory.

use std::path::{Path, PathBuf};

use combat_core::{AbilityCatalog, CombatConfig, Combatant, Ladder};

use crate::loaders::{CatalogLoader, ConfigLoader, LadderLoader, LoadResult, RosterLoader};

/// Content factory that loads combat content from a data directory.
///
/// Files absent from the directory fall back to the embedded defaults.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── abilities.ron
/// ├── ladder.ron
/// ├── combat.toml
/// └── roster.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the ability catalog from `abilities.ron`.
    pub fn load_catalog(&self) -> LoadResult<AbilityCatalog> {
        match self.existing("abilities.ron") {
            Some(path) => CatalogLoader::load(&path),
            None => CatalogLoader::load_default(),
        }
    }

    /// Load the decision ladder from `ladder.ron`.
    pub fn load_ladder(&self) -> LoadResult<Ladder> {
        match self.existing("ladder.ron") {
            Some(path) => LadderLoader::load(&path),
            None => LadderLoader::load_default(),
        }
    }

    /// Load combat tunables from `combat.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        match self.existing("combat.toml") {
            Some(path) => ConfigLoader::load(&path),
            None => ConfigLoader::load_default(),
        }
    }

    /// Load preset combatants from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Vec<Combatant>> {
        match self.existing("roster.ron") {
            Some(path) => RosterLoader::load(&path),
            None => RosterLoader::load_default(),
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn existing(&self, file: &str) -> Option<PathBuf> {
        let path = self.data_dir.join(file);
        if path.is_file() {
            Some(path)
        } else {
            tracing::debug!(file, dir = %self.data_dir.display(), "using embedded default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_directory_falls_back_to_embedded_data() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.data_dir(), dir.path());
        assert_eq!(factory.load_config().unwrap(), CombatConfig::default());
        assert_eq!(factory.load_ladder().unwrap(), Ladder::standard());
        assert!(!factory.load_catalog().unwrap().is_empty());
        assert!(!factory.load_roster().unwrap().is_empty());
    }

    #[test]
    fn present_files_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("combat.toml"), "passive_improvement = false\n").unwrap();

        let config = ContentFactory::new(dir.path()).load_config().unwrap();
        assert!(!config.passive_improvement);
    }
}
