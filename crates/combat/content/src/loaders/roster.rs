//! Preset combatant loader.

use std::collections::HashSet;
use std::path::Path;

use combat_core::Combatant;

use crate::loaders::{LoadResult, read_file};

const DEFAULT_ROSTER: &str = include_str!("../../data/roster.ron");

/// Loader for preset combatants from RON files.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Combatant>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn load_default() -> LoadResult<Vec<Combatant>> {
        Self::parse(DEFAULT_ROSTER)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Combatant>> {
        let roster: Vec<Combatant> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut seen = HashSet::new();
        for combatant in &roster {
            if !seen.insert(combatant.id) {
                anyhow::bail!("Duplicate combatant id {} ({})", combatant.id, combatant.name);
            }
            if combatant.health.current > combatant.health.maximum
                || combatant.mana.current > combatant.mana.maximum
            {
                anyhow::bail!("{} starts above a pool maximum", combatant.name);
            }
        }

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use combat_core::{ActorId, Archetype};

    use super::*;

    #[test]
    fn default_roster_is_automated_monsters() {
        let roster = RosterLoader::load_default().unwrap();

        assert!(roster.len() >= 2);
        for combatant in &roster {
            assert!(combatant.automated, "{} is not automated", combatant.name);
            assert!(!combatant.archetype.is_player_class());
            assert!(combatant.is_alive());
        }

        let drake = roster.iter().find(|c| c.id == ActorId(104)).unwrap();
        assert_eq!(drake.archetype, Archetype::Dragon);
        assert!(drake.boss);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let entry = r#"(id: (7), name: "Rat", archetype: Beast,
            stats: (strength: 6, dexterity: 14, constitution: 8, intelligence: 2, wisdom: 10, level: 1),
            health: (current: 8, maximum: 8), mana: (current: 0, maximum: 0), automated: true)"#;
        let doubled = format!("[{entry}, {entry}]");

        let err = RosterLoader::parse(&doubled).unwrap_err();
        assert!(err.to_string().contains("Duplicate combatant id"));
    }
}
