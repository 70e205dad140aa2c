//! Decision ladder loader.

use std::path::Path;

use combat_core::Ladder;

use crate::loaders::{LoadResult, read_file};

const DEFAULT_LADDER: &str = include_str!("../../data/ladder.ron");

/// Loader for the automated-combatant decision ladder from RON files.
pub struct LadderLoader;

impl LadderLoader {
    pub fn load(path: &Path) -> LoadResult<Ladder> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn load_default() -> LoadResult<Ladder> {
        Self::parse(DEFAULT_LADDER)
    }

    pub fn parse(content: &str) -> LoadResult<Ladder> {
        let ladder: Ladder = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ladder RON: {}", e))?;

        for (index, rule) in ladder.iter().enumerate() {
            if ladder.iter().skip(index + 1).any(|other| other.name == rule.name) {
                anyhow::bail!("Duplicate ladder rule name: {}", rule.name);
            }
        }

        Ok(ladder)
    }
}
