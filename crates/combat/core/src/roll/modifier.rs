//! Roll modifier composition and target difficulty.
//!
//! The resolver only sees one pre-summed integer. This module is where that
//! integer comes from, kept as a breakdown so narration can show its parts.

use crate::actor::{Archetype, Combatant, CoreStats, StatusKind};
use crate::proficiency::Tier;

/// Equipment power points per modifier point.
const EQUIPMENT_STEP: u32 = 5;
/// Largest bonus equipment may contribute to a roll or to evasion.
const EQUIPMENT_CAP: i32 = 4;

const BASE_EVASION: i32 = 10;

/// Parts of an attack modifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierBreakdown {
    pub stat: i32,
    pub tier: i32,
    pub level: i32,
    pub equipment: i32,
    /// Penalties from active statuses (always zero or negative).
    pub status: i32,
}

impl ModifierBreakdown {
    /// Compose the modifier for `attacker` using a skill at `tier`.
    pub fn for_attacker(attacker: &Combatant, tier: Tier) -> Self {
        Self {
            stat: CoreStats::attribute_term(primary_score(&attacker.stats, attacker.archetype)),
            tier: tier.roll_modifier(),
            level: attacker.stats.level.max(0) / 4,
            equipment: equipment_term(attacker.weapon_power),
            status: status_penalty(attacker),
        }
    }

    pub fn total(&self) -> i32 {
        self.stat + self.tier + self.level + self.equipment + self.status
    }
}

/// Attribute an archetype attacks with.
pub fn primary_score(stats: &CoreStats, archetype: Archetype) -> i32 {
    match archetype {
        Archetype::Rogue | Archetype::Ranger | Archetype::Insect => stats.dexterity,
        Archetype::Mage | Archetype::Elemental => stats.intelligence,
        Archetype::Cleric => stats.wisdom,
        Archetype::Warrior
        | Archetype::Beast
        | Archetype::Undead
        | Archetype::Humanoid
        | Archetype::Demon
        | Archetype::Dragon => stats.strength,
    }
}

/// Difficulty an attacker must meet to land an opposed action on `defender`.
///
/// Symmetric: the same formula applies whether the defender is automated or
/// player-directed.
pub fn evasion(defender: &Combatant) -> i32 {
    let mut value = BASE_EVASION
        + CoreStats::attribute_term(defender.stats.dexterity)
        + equipment_term(defender.armor_power)
        + defender.stats.level.max(0) / 5;

    if defender.has_status(StatusKind::Evasive) {
        value += 2;
    }
    if defender.has_status(StatusKind::Invisible) {
        value += 4;
    }
    if defender.has_status(StatusKind::Berserk) {
        value -= 2;
    }
    value
}

fn equipment_term(power: u32) -> i32 {
    ((power / EQUIPMENT_STEP) as i32).min(EQUIPMENT_CAP)
}

fn status_penalty(attacker: &Combatant) -> i32 {
    let mut penalty = 0;
    if attacker.has_status(StatusKind::Weakened) {
        penalty -= 2;
    }
    if attacker.has_status(StatusKind::Blinded) {
        penalty -= 4;
    }
    penalty
}
