//! Command-line arguments and content selection.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use combat_content::{CatalogLoader, ConfigLoader, ContentFactory, LadderLoader, RosterLoader};
use combat_core::{AbilityCatalog, CombatConfig, Combatant, Ladder};

/// Run seeded automated duels and summarize the results
#[derive(Parser, Debug)]
#[command(name = "combat-sim")]
#[command(about = "Headless combat duel simulator", long_about = None)]
#[command(version)]
pub struct Args {
    /// Base seed; duel `n` uses `seed + n`
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of duels to run
    #[arg(long, default_value_t = 100)]
    pub duels: u32,

    /// Rounds after which a duel ends without a winner
    #[arg(long, default_value_t = 50)]
    pub max_rounds: u32,

    /// Directory holding abilities.ron, ladder.ron, combat.toml and roster.ron
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Ability catalog (RON)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Combat tunables (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Decision ladder (RON)
    #[arg(long)]
    pub ladder: Option<PathBuf>,

    /// Preset combatants (RON)
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Name of the first fighter (defaults to the first roster entry)
    #[arg(long)]
    pub left: Option<String>,

    /// Name of the second fighter (defaults to the second roster entry)
    #[arg(long)]
    pub right: Option<String>,
}

/// Everything a simulation run reads from disk.
pub struct Content {
    pub catalog: AbilityCatalog,
    pub config: CombatConfig,
    pub ladder: Ladder,
    pub roster: Vec<Combatant>,
}

impl Args {
    /// Individual file flags win over `--data`; anything unset uses embedded data.
    pub fn load_content(&self) -> Result<Content> {
        let factory = self.data.as_ref().map(ContentFactory::new);

        let catalog = match (&self.catalog, &factory) {
            (Some(path), _) => CatalogLoader::load(path)?,
            (None, Some(factory)) => factory.load_catalog()?,
            (None, None) => CatalogLoader::load_default()?,
        };
        let config = match (&self.config, &factory) {
            (Some(path), _) => ConfigLoader::load(path)?,
            (None, Some(factory)) => factory.load_config()?,
            (None, None) => ConfigLoader::load_default()?,
        };
        let ladder = match (&self.ladder, &factory) {
            (Some(path), _) => LadderLoader::load(path)?,
            (None, Some(factory)) => factory.load_ladder()?,
            (None, None) => LadderLoader::load_default()?,
        };
        let roster = match (&self.roster, &factory) {
            (Some(path), _) => RosterLoader::load(path)?,
            (None, Some(factory)) => factory.load_roster()?,
            (None, None) => RosterLoader::load_default()?,
        };

        Ok(Content {
            catalog,
            config,
            ladder,
            roster,
        })
    }

    pub fn pick_fighters<'r>(
        &self,
        roster: &'r [Combatant],
    ) -> Result<(&'r Combatant, &'r Combatant)> {
        let left = pick(roster, self.left.as_deref(), 0)?;
        let right = pick(roster, self.right.as_deref(), 1)?;

        if left.id == right.id {
            anyhow::bail!("{} cannot duel itself", left.name);
        }
        Ok((left, right))
    }
}

fn pick<'r>(roster: &'r [Combatant], name: Option<&str>, fallback: usize) -> Result<&'r Combatant> {
    match name {
        Some(name) => roster
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow!("No combatant named {name:?} in the roster")),
        None => roster
            .get(fallback)
            .ok_or_else(|| anyhow!("Roster needs at least two combatants")),
    }
}

#[cfg(test)]
mod tests {
    use combat_core::{ActorId, Archetype};

    use super::*;

    fn roster() -> Vec<Combatant> {
        vec![
            Combatant::new(ActorId(1), "Cave Bear", Archetype::Beast),
            Combatant::new(ActorId(2), "Bone Knight", Archetype::Undead),
        ]
    }

    #[test]
    fn defaults_to_first_two_entries() {
        let args = Args::parse_from(["combat-sim"]);
        let roster = roster();

        let (left, right) = args.pick_fighters(&roster).unwrap();
        assert_eq!((left.id, right.id), (ActorId(1), ActorId(2)));
        assert_eq!(args.seed, 42);
    }

    #[test]
    fn picks_by_name_case_insensitively() {
        let args = Args::parse_from(["combat-sim", "--left", "bone knight", "--right", "CAVE BEAR"]);
        let roster = roster();

        let (left, right) = args.pick_fighters(&roster).unwrap();
        assert_eq!((left.id, right.id), (ActorId(2), ActorId(1)));
    }

    #[test]
    fn rejects_mirror_matches_and_unknown_names() {
        let roster = roster();

        let mirror = Args::parse_from(["combat-sim", "--left", "Cave Bear", "--right", "Cave Bear"]);
        assert!(mirror.pick_fighters(&roster).is_err());

        let unknown = Args::parse_from(["combat-sim", "--left", "Lich"]);
        assert!(unknown.pick_fighters(&roster).is_err());
    }

    #[test]
    fn embedded_content_loads_without_flags() {
        let content = Args::parse_from(["combat-sim"]).load_content().unwrap();
        assert!(!content.catalog.is_empty());
        assert!(content.roster.len() >= 2);
    }
}
