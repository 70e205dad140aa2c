//! Combatant snapshots consumed by the combat core.
//!
//! The turn loop owns the real actor data. Before each action it hands the
//! core a [`Combatant`] snapshot: attributes, pools, equipment power and
//! active statuses. The core reads snapshots and returns results; it never
//! mutates them.

pub mod stats;
pub mod status;

use std::fmt;

use bitflags::bitflags;

pub use stats::{CoreStats, Ratio, ResourceMeter};
pub use status::{StatusEffect, StatusEffects, StatusKind};

/// Unique identifier for a combatant within a play session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Class of a player character or family of a monster.
///
/// Archetype decides which catalog abilities a combatant may use and which
/// skills start at Average proficiency.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    // Player classes
    #[default]
    Warrior,
    Mage,
    Rogue,
    Cleric,
    Ranger,

    // Monster families
    Beast,
    Undead,
    Humanoid,
    Demon,
    Elemental,
    Insect,
    Dragon,
}

impl Archetype {
    /// Player classes are directed by a human; families are automated.
    pub const fn is_player_class(self) -> bool {
        matches!(
            self,
            Self::Warrior | Self::Mage | Self::Rogue | Self::Cleric | Self::Ranger
        )
    }

    /// The single-bit set containing this archetype.
    pub const fn as_set(self) -> ArchetypeSet {
        match self {
            Self::Warrior => ArchetypeSet::WARRIOR,
            Self::Mage => ArchetypeSet::MAGE,
            Self::Rogue => ArchetypeSet::ROGUE,
            Self::Cleric => ArchetypeSet::CLERIC,
            Self::Ranger => ArchetypeSet::RANGER,
            Self::Beast => ArchetypeSet::BEAST,
            Self::Undead => ArchetypeSet::UNDEAD,
            Self::Humanoid => ArchetypeSet::HUMANOID,
            Self::Demon => ArchetypeSet::DEMON,
            Self::Elemental => ArchetypeSet::ELEMENTAL,
            Self::Insect => ArchetypeSet::INSECT,
            Self::Dragon => ArchetypeSet::DRAGON,
        }
    }
}

bitflags! {
    /// Set of archetypes allowed to use a catalog entry.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ArchetypeSet: u16 {
        const WARRIOR   = 1 << 0;
        const MAGE      = 1 << 1;
        const ROGUE     = 1 << 2;
        const CLERIC    = 1 << 3;
        const RANGER    = 1 << 4;
        const BEAST     = 1 << 5;
        const UNDEAD    = 1 << 6;
        const HUMANOID  = 1 << 7;
        const DEMON     = 1 << 8;
        const ELEMENTAL = 1 << 9;
        const INSECT    = 1 << 10;
        const DRAGON    = 1 << 11;

        const PLAYER_CLASSES = Self::WARRIOR.bits()
            | Self::MAGE.bits()
            | Self::ROGUE.bits()
            | Self::CLERIC.bits()
            | Self::RANGER.bits();
        const MONSTERS = Self::BEAST.bits()
            | Self::UNDEAD.bits()
            | Self::HUMANOID.bits()
            | Self::DEMON.bits()
            | Self::ELEMENTAL.bits()
            | Self::INSECT.bits()
            | Self::DRAGON.bits();
    }
}

impl ArchetypeSet {
    pub fn allows(&self, archetype: Archetype) -> bool {
        self.contains(archetype.as_set())
    }
}

/// Read-only snapshot of one combatant at the moment an action resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: ActorId,
    pub name: String,
    pub archetype: Archetype,
    pub stats: CoreStats,
    pub health: ResourceMeter,
    pub mana: ResourceMeter,
    /// Power rating of the equipped weapon (0 = unarmed).
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapon_power: u32,
    /// Power rating of the equipped armor (0 = unarmored).
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor_power: u32,
    /// Monster strength tier (0-3) used to unlock stronger abilities.
    #[cfg_attr(feature = "serde", serde(default))]
    pub monster_tier: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub boss: bool,
    /// Whether the Decision Engine chooses this combatant's actions.
    pub automated: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub statuses: StatusEffects,
}

impl Combatant {
    pub fn new(id: ActorId, name: impl Into<String>, archetype: Archetype) -> Self {
        Self {
            id,
            name: name.into(),
            archetype,
            stats: CoreStats::default(),
            health: ResourceMeter::full(30),
            mana: ResourceMeter::full(0),
            weapon_power: 0,
            armor_power: 0,
            monster_tier: 0,
            boss: false,
            automated: !archetype.is_player_class(),
            statuses: StatusEffects::empty(),
        }
    }

    #[must_use]
    pub fn with_stats(mut self, stats: CoreStats) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_health(mut self, current: u32, maximum: u32) -> Self {
        self.health = ResourceMeter::new(current, maximum);
        self
    }

    #[must_use]
    pub fn with_mana(mut self, current: u32, maximum: u32) -> Self {
        self.mana = ResourceMeter::new(current, maximum);
        self
    }

    #[must_use]
    pub fn with_equipment(mut self, weapon_power: u32, armor_power: u32) -> Self {
        self.weapon_power = weapon_power;
        self.armor_power = armor_power;
        self
    }

    #[must_use]
    pub fn with_monster_tier(mut self, tier: u8) -> Self {
        self.monster_tier = tier;
        self
    }

    #[must_use]
    pub fn as_boss(mut self) -> Self {
        self.boss = true;
        self
    }

    #[must_use]
    pub fn with_status(mut self, kind: StatusKind, rounds: u8) -> Self {
        self.statuses.add(kind, rounds);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.health.current > 0
    }

    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.statuses.has(kind)
    }
}
