//! Side-table of mastery per (actor, skill) pair.

use std::collections::HashMap;

use crate::actor::{ActorId, Archetype};
use crate::catalog::AbilityId;
use crate::error::{CombatError, ErrorSeverity};
use crate::rng::Dice;

use super::Tier;

/// Weapon families trained independently of abilities.
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
pub enum WeaponSkill {
    Blade,
    Axe,
    Blunt,
    Dagger,
    Staff,
    Bow,
    Unarmed,
    /// Claws, fangs, stingers.
    Natural,
}

impl WeaponSkill {
    /// Weapon family an archetype fights with by default.
    pub const fn default_for(archetype: Archetype) -> Self {
        match archetype {
            Archetype::Warrior => Self::Blade,
            Archetype::Mage => Self::Staff,
            Archetype::Rogue => Self::Dagger,
            Archetype::Cleric => Self::Blunt,
            Archetype::Ranger => Self::Bow,
            Archetype::Humanoid => Self::Axe,
            Archetype::Beast
            | Archetype::Undead
            | Archetype::Demon
            | Archetype::Elemental
            | Archetype::Insect
            | Archetype::Dragon => Self::Natural,
        }
    }
}

/// Anything an actor can be proficient in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillId {
    Weapon(WeaponSkill),
    Ability(AbilityId),
}

impl SkillId {
    /// Whether this skill is part of an archetype's starting kit.
    ///
    /// Intrinsic skills default to [`Tier::Average`] instead of Untrained.
    pub fn is_intrinsic_to(&self, archetype: Archetype) -> bool {
        use AbilityId as A;
        match *self {
            SkillId::Weapon(weapon) => {
                weapon == WeaponSkill::default_for(archetype)
                    || matches!(
                        (archetype, weapon),
                        (Archetype::Warrior, WeaponSkill::Axe)
                            | (Archetype::Rogue, WeaponSkill::Bow)
                            | (Archetype::Humanoid, WeaponSkill::Blade)
                    )
            }
            SkillId::Ability(ability) => matches!(
                (archetype, ability),
                (Archetype::Warrior, A::PowerStrike | A::Cleave | A::ShieldWall)
                    | (Archetype::Mage, A::Fireball | A::FrostBolt | A::ManaLeech)
                    | (Archetype::Rogue, A::Backstab | A::PoisonBlade | A::Evade)
                    | (Archetype::Cleric, A::Heal | A::Smite)
                    | (Archetype::Ranger, A::ArrowVolley | A::Evade)
            ),
        }
    }
}

impl From<WeaponSkill> for SkillId {
    fn from(weapon: WeaponSkill) -> Self {
        SkillId::Weapon(weapon)
    }
}

impl From<AbilityId> for SkillId {
    fn from(ability: AbilityId) -> Self {
        SkillId::Ability(ability)
    }
}

/// One actor's mastery of one skill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProficiencyRecord {
    pub tier: Tier,
    /// Points accumulated toward the next tier.
    pub progress: u32,
}

impl ProficiencyRecord {
    pub fn new(tier: Tier) -> Self {
        Self { tier, progress: 0 }
    }

    /// Points still missing before the next tier, `None` at Legendary.
    pub fn points_to_next(&self) -> Option<u32> {
        self.tier
            .threshold()
            .map(|threshold| threshold.saturating_sub(self.progress))
    }
}

/// Training points an actor can spend on deliberate practice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingPool {
    pub points: u32,
}

impl TrainingPool {
    pub fn new(points: u32) -> Self {
        Self { points }
    }
}

/// Why a training spend was refused. The pool is never touched on refusal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrainingRefusal {
    #[error("not enough training points: need {requested}, have {available}")]
    InsufficientPoints { requested: u32, available: u32 },

    #[error("{skill:?} is already Legendary")]
    AlreadyLegendary { skill: SkillId },

    #[error("training spend must be at least one point")]
    NothingToSpend,
}

impl CombatError for TrainingRefusal {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientPoints { .. } => "training_insufficient_points",
            Self::AlreadyLegendary { .. } => "training_already_legendary",
            Self::NothingToSpend => "training_nothing_to_spend",
        }
    }
}

/// Per-actor, per-skill tier and progress store.
///
/// Records are created lazily: reading a skill never creates one, the first
/// progress deposit does. Tiers only move up, except through the explicit
/// [`reset_actor`](Self::reset_actor) and [`reset_all`](Self::reset_all).
#[derive(Clone, Debug, Default)]
pub struct ProficiencyLedger {
    archetypes: HashMap<ActorId, Archetype>,
    records: HashMap<(ActorId, SkillId), ProficiencyRecord>,
}

impl ProficiencyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember an actor's archetype so its intrinsic skills default to Average.
    pub fn register(&mut self, actor: ActorId, archetype: Archetype) {
        self.archetypes.insert(actor, archetype);
    }

    pub fn archetype(&self, actor: ActorId) -> Option<Archetype> {
        self.archetypes.get(&actor).copied()
    }

    /// Tier an actor starts at for a skill it has never trained.
    pub fn default_tier(&self, actor: ActorId, skill: SkillId) -> Tier {
        match self.archetype(actor) {
            Some(archetype) if skill.is_intrinsic_to(archetype) => Tier::Average,
            _ => Tier::Untrained,
        }
    }

    /// Stored tier, or the default when the actor never trained the skill.
    pub fn get_tier(&self, actor: ActorId, skill: SkillId) -> Tier {
        self.records
            .get(&(actor, skill))
            .map(|record| record.tier)
            .unwrap_or_else(|| self.default_tier(actor, skill))
    }

    /// Stored record, if one exists.
    pub fn record(&self, actor: ActorId, skill: SkillId) -> Option<&ProficiencyRecord> {
        self.records.get(&(actor, skill))
    }

    /// All stored records of one actor.
    pub fn records_of(&self, actor: ActorId) -> impl Iterator<Item = (SkillId, &ProficiencyRecord)> {
        self.records
            .iter()
            .filter(move |((owner, _), _)| *owner == actor)
            .map(|((_, skill), record)| (*skill, record))
    }

    /// Deposit progress points, advancing at most one tier per call.
    ///
    /// Progress beyond the current threshold is carried forward, not lost:
    /// depositing 5 points on a fresh Untrained skill (threshold 1) yields Poor
    /// with 4 points banked. Returns `true` exactly when the tier increased.
    /// Legendary rejects progress and returns `false`.
    pub fn add_progress(&mut self, actor: ActorId, skill: SkillId, points: u32) -> bool {
        if points == 0 {
            return false;
        }

        let default_tier = self.default_tier(actor, skill);
        let record = self
            .records
            .entry((actor, skill))
            .or_insert_with(|| ProficiencyRecord::new(default_tier));

        let (Some(threshold), Some(next)) = (record.tier.threshold(), record.tier.next()) else {
            return false;
        };

        record.progress = record.progress.saturating_add(points);
        if record.progress < threshold {
            return false;
        }

        record.progress -= threshold;
        let previous = record.tier;
        record.tier = next;
        if next.is_max() {
            record.progress = 0;
        }

        tracing::debug!(
            actor = %actor,
            ?skill,
            from = %previous,
            to = %next,
            carried = record.progress,
            "proficiency tier increased"
        );
        true
    }

    /// Roll the passive chance of learning from one use of a skill.
    ///
    /// Master and Legendary have no chance and consume no draw. Returns the
    /// result of the one-point [`add_progress`](Self::add_progress) on success.
    pub fn try_improve_from_use(
        &mut self,
        actor: ActorId,
        skill: SkillId,
        dice: &mut impl Dice,
    ) -> bool {
        let chance = self.get_tier(actor, skill).use_improvement_percent();
        if chance == 0 {
            return false;
        }
        if !dice.chance(chance) {
            return false;
        }
        tracing::trace!(actor = %actor, ?skill, "learned from use");
        self.add_progress(actor, skill, 1)
    }

    /// Spend training points from `pool` on a skill.
    ///
    /// On refusal nothing changes. On success the points leave the pool and
    /// go through [`add_progress`](Self::add_progress), whose result is
    /// returned.
    pub fn spend_training(
        &mut self,
        actor: ActorId,
        skill: SkillId,
        pool: &mut TrainingPool,
        points: u32,
    ) -> Result<bool, TrainingRefusal> {
        if points == 0 {
            return Err(TrainingRefusal::NothingToSpend);
        }
        if self.get_tier(actor, skill).is_max() {
            return Err(TrainingRefusal::AlreadyLegendary { skill });
        }
        if pool.points < points {
            return Err(TrainingRefusal::InsufficientPoints {
                requested: points,
                available: pool.points,
            });
        }

        pool.points -= points;
        Ok(self.add_progress(actor, skill, points))
    }

    /// Grant a tier outright (quest reward, archetype template). Progress resets.
    ///
    /// Grants never lower a skill: a tier at or below the current one is
    /// ignored and `false` returned. Use the resets to start over.
    pub fn set_tier(&mut self, actor: ActorId, skill: SkillId, tier: Tier) -> bool {
        if tier <= self.get_tier(actor, skill) {
            return false;
        }
        self.records
            .insert((actor, skill), ProficiencyRecord::new(tier));
        true
    }

    /// Forget every record of one actor.
    pub fn reset_actor(&mut self, actor: ActorId) {
        self.records.retain(|(owner, _), _| *owner != actor);
    }

    /// Forget every record of every actor. Registered archetypes are kept.
    pub fn reset_all(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
