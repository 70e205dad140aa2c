//! Ability definitions: the static data behind every attack, spell and
//! monster trick.

use bitflags::bitflags;

use crate::actor::{Archetype, ArchetypeSet, StatusKind};
use crate::proficiency::{SkillId, WeaponSkill};
use crate::rng::Dice;

/// Closed set of ability identifiers.
///
/// Catalog files refer to abilities by these names; an unknown name fails to
/// parse at load time instead of surfacing as a missing entry mid-fight.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityId {
    // Class abilities and spells
    PowerStrike,
    Cleave,
    ShieldWall,
    Fireball,
    FrostBolt,
    ManaLeech,
    Heal,
    Smite,
    Backstab,
    PoisonBlade,
    Evade,
    ArrowVolley,

    // Monster abilities
    Regenerate,
    BerserkRage,
    Flee,
    Execute,
    AmbushStrike,
    Terrify,
    SummonPack,
    CallForHelp,
    StunBash,
    Silence,
    BlindingSpit,
    VenomBite,
    Rend,
    Immolate,
    DrainLife,
    Frenzy,
    FireBreath,
    RageRecovery,
}

/// What an ability does once it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityClass {
    Damage,
    /// Kills outright below one fifth health.
    Finisher,
    /// Damage plus healing for a share of what was dealt.
    LifeSteal,
    ManaDrain,
    MultiStrike { strikes: u8 },
    Heal,
    Buff,
    Summon,
    Flee,
}

impl AbilityClass {
    /// Classes whose magnitude is health damage to the targets.
    pub const fn deals_damage(self) -> bool {
        matches!(
            self,
            Self::Damage | Self::Finisher | Self::LifeSteal | Self::MultiStrike { .. }
        )
    }
}

/// Slot an ability occupies in the automated decision ladder.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum AbilityRole {
    SelfHeal,
    Berserk,
    Flee,
    Finisher,
    Ambush,
    Summon,
    CallForHelp,
    CrowdControl,
    DamageOverTime,
    Offensive,
    /// Self-buffs no ladder rule offers; reachable through the fallback pick.
    Defensive,
    /// Boss-only rage recovery; granted to every boss regardless of family.
    Recovery,
}

/// Which proficiency a use of the ability trains and rolls with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillSchool {
    /// The user's weapon family.
    #[default]
    Weapon,
    /// The ability itself.
    Ability,
}

bitflags! {
    /// Targeting and resolution flags of an ability.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct AbilityFlags: u8 {
        /// Hits every valid target in the encounter.
        const MULTI_TARGET = 1 << 0;
        /// Blocked by Silenced.
        const SPELL        = 1 << 1;
        /// Affects only the user.
        const SELF_TARGET  = 1 << 2;
        /// Needs a roll against the target's evasion.
        const OPPOSED      = 1 << 3;
    }
}

/// Inclusive magnitude range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Magnitude {
    pub min: u32,
    pub max: u32,
}

impl Magnitude {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: u32) -> Self {
        Self::new(value, value)
    }

    pub fn roll(&self, dice: &mut impl Dice) -> u32 {
        dice.range(self.min, self.max)
    }
}

/// A status an ability may attach to each target it affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusInfliction {
    pub kind: StatusKind,
    /// Rounds the status lasts.
    pub duration: u8,
    /// Percent chance per target.
    pub chance: u32,
}

/// One catalog entry. Immutable once the catalog is built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityDefinition {
    pub id: AbilityId,
    pub name: String,
    pub class: AbilityClass,
    pub role: AbilityRole,
    /// Mana spent per use.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: u32,
    pub magnitude: Magnitude,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<StatusInfliction>,
    /// Share of dealt damage returned as healing (LifeSteal only).
    #[cfg_attr(feature = "serde", serde(default))]
    pub life_steal_percent: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub school: SkillSchool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: AbilityFlags,
    pub archetypes: ArchetypeSet,
    /// Lowest monster tier that may use this ability (bosses ignore it).
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_monster_tier: u8,
    /// Ladder chance overriding the rule's default for this ability.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ai_chance: Option<u32>,
}

impl AbilityDefinition {
    /// Minimal definition: opposed single-target weapon damage usable by no one.
    pub fn new(id: AbilityId, class: AbilityClass, role: AbilityRole) -> Self {
        Self {
            id,
            name: id.to_string(),
            class,
            role,
            cost: 0,
            magnitude: Magnitude::fixed(1),
            status: None,
            life_steal_percent: None,
            school: SkillSchool::Weapon,
            flags: AbilityFlags::OPPOSED,
            archetypes: ArchetypeSet::empty(),
            min_monster_tier: 0,
            ai_chance: None,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_magnitude(mut self, min: u32, max: u32) -> Self {
        self.magnitude = Magnitude::new(min, max);
        self
    }

    #[must_use]
    pub fn with_status(mut self, kind: StatusKind, duration: u8, chance: u32) -> Self {
        self.status = Some(StatusInfliction {
            kind,
            duration,
            chance,
        });
        self
    }

    #[must_use]
    pub fn with_life_steal(mut self, percent: u32) -> Self {
        self.life_steal_percent = Some(percent);
        self
    }

    #[must_use]
    pub fn with_school(mut self, school: SkillSchool) -> Self {
        self.school = school;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: AbilityFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn for_archetypes(mut self, archetypes: ArchetypeSet) -> Self {
        self.archetypes = archetypes;
        self
    }

    #[must_use]
    pub fn with_min_monster_tier(mut self, tier: u8) -> Self {
        self.min_monster_tier = tier;
        self
    }

    #[must_use]
    pub fn with_ai_chance(mut self, percent: u32) -> Self {
        self.ai_chance = Some(percent);
        self
    }

    pub fn is_spell(&self) -> bool {
        self.flags.contains(AbilityFlags::SPELL)
    }

    pub fn is_opposed(&self) -> bool {
        self.flags.contains(AbilityFlags::OPPOSED)
    }

    pub fn is_multi_target(&self) -> bool {
        self.flags.contains(AbilityFlags::MULTI_TARGET)
    }

    pub fn is_self_targeted(&self) -> bool {
        self.flags.contains(AbilityFlags::SELF_TARGET)
    }

    /// Proficiency a user of `archetype` rolls and trains with this ability.
    pub fn skill_for(&self, archetype: Archetype) -> SkillId {
        match self.school {
            SkillSchool::Weapon => SkillId::Weapon(WeaponSkill::default_for(archetype)),
            SkillSchool::Ability => SkillId::Ability(self.id),
        }
    }

    /// Whether a combatant may use this ability at all.
    ///
    /// Bosses skip the monster tier unlock and always gain Recovery abilities.
    pub fn is_available_to(&self, archetype: Archetype, monster_tier: u8, boss: bool) -> bool {
        if boss && self.role == AbilityRole::Recovery {
            return true;
        }
        self.archetypes.allows(archetype) && (boss || monster_tier >= self.min_monster_tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire_breath() -> AbilityDefinition {
        AbilityDefinition::new(AbilityId::FireBreath, AbilityClass::Damage, AbilityRole::Offensive)
            .for_archetypes(ArchetypeSet::DRAGON)
            .with_min_monster_tier(2)
    }

    #[test]
    fn tier_unlock_gates_non_bosses() {
        let breath = fire_breath();
        assert!(!breath.is_available_to(Archetype::Dragon, 1, false));
        assert!(breath.is_available_to(Archetype::Dragon, 2, false));
        assert!(breath.is_available_to(Archetype::Dragon, 0, true));
        assert!(!breath.is_available_to(Archetype::Beast, 3, true));
    }

    #[test]
    fn bosses_always_gain_recovery() {
        let recovery = AbilityDefinition::new(
            AbilityId::RageRecovery,
            AbilityClass::Heal,
            AbilityRole::Recovery,
        );
        assert!(recovery.is_available_to(Archetype::Insect, 0, true));
        assert!(!recovery.is_available_to(Archetype::Insect, 3, false));
    }

    #[test]
    fn school_selects_trained_skill() {
        let strike =
            AbilityDefinition::new(AbilityId::PowerStrike, AbilityClass::Damage, AbilityRole::Offensive);
        assert_eq!(
            strike.skill_for(Archetype::Warrior),
            SkillId::Weapon(WeaponSkill::Blade)
        );
        let bolt = strike.clone().with_school(SkillSchool::Ability);
        assert_eq!(
            bolt.skill_for(Archetype::Mage),
            SkillId::Ability(AbilityId::PowerStrike)
        );
    }

    #[test]
    fn ids_parse_from_snake_case() {
        assert_eq!("fire_breath".parse::<AbilityId>().ok(), Some(AbilityId::FireBreath));
        assert_eq!(AbilityId::CallForHelp.to_string(), "call_for_help");
    }
}
