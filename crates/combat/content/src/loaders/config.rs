//! Combat configuration loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

const DEFAULT_CONFIG: &str = include_str!("../../data/combat.toml");

/// Loader for combat configuration from TOML files.
///
/// Every key is optional; omitted keys keep [`CombatConfig::default`] values.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing CombatConfig
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn load_default() -> LoadResult<CombatConfig> {
        Self::parse(DEFAULT_CONFIG)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.roll.natural_min >= config.roll.natural_max {
            anyhow::bail!(
                "natural_min ({}) must be below natural_max ({})",
                config.roll.natural_min,
                config.roll.natural_max
            );
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn embedded_config_equals_defaults() {
        assert_eq!(ConfigLoader::load_default().unwrap(), CombatConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "passive_improvement = false").unwrap();
        writeln!(file, "[decision]").unwrap();
        writeln!(file, "plain_attack_percent = 25").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert!(!config.passive_improvement);
        assert_eq!(config.decision.plain_attack_percent, 25);
        assert_eq!(config.roll, CombatConfig::default().roll);
        assert_eq!(config.degrees, CombatConfig::default().degrees);
    }

    #[test]
    fn rejects_inverted_roll_bounds() {
        let err = ConfigLoader::parse("[roll]\nnatural_min = 20\nnatural_max = 1\n").unwrap_err();
        assert!(err.to_string().contains("natural_min"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ConfigLoader::parse("[roll\nnatural_min = 1").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
