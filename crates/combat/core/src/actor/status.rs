//! Status effects carried by combatants.
//!
//! Status effects are temporary conditions that restrict actions, modify
//! rolls or deal damage over time.
//!
//! # Round-based Duration
//!
//! Each effect stores the number of rounds it has left. The external turn loop
//! calls [`StatusEffects::tick_round`] once per round; effects whose counter
//! reaches zero are removed.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;

/// Active status effects on a combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { CombatConfig::MAX_STATUS_EFFECTS }>,
}

/// A single status effect with its remaining duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Rounds left before the effect expires.
    pub remaining: u8,
}

/// Types of status effects.
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
pub enum StatusKind {
    // ========================================================================
    // Crowd Control (restricts actions)
    // ========================================================================
    /// Cannot act at all.
    Stunned,

    /// Cannot cast spells.
    Silenced,

    /// Accuracy heavily reduced.
    Blinded,

    /// Prone to fleeing, never ambushes.
    Frightened,

    // ========================================================================
    // Damage over time
    // ========================================================================
    /// HP loss each round.
    Poisoned,

    /// HP loss each round.
    Bleeding,

    /// Fire damage each round.
    Burning,

    // ========================================================================
    // Buffs
    // ========================================================================
    /// HP recovery each round.
    Regenerating,

    /// Damage dealt increased, defense ignored.
    Berserk,

    /// Evasion bonus.
    Evasive,

    /// Large evasion bonus.
    Invisible,

    /// Incoming damage halved.
    Shielded,

    // ========================================================================
    // Debuffs
    // ========================================================================
    /// Accuracy reduced.
    Weakened,
}

impl StatusKind {
    /// Statuses that deny or restrict the victim's actions.
    pub const fn is_crowd_control(self) -> bool {
        matches!(
            self,
            Self::Stunned | Self::Silenced | Self::Blinded | Self::Frightened
        )
    }

    /// Statuses that deal damage at the start of each round.
    pub const fn is_damage_over_time(self) -> bool {
        matches!(self, Self::Poisoned | Self::Bleeding | Self::Burning)
    }

    /// Statuses a combatant would want on itself.
    pub const fn is_beneficial(self) -> bool {
        matches!(
            self,
            Self::Regenerating | Self::Berserk | Self::Evasive | Self::Invisible | Self::Shielded
        )
    }
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if a specific status effect is active.
    pub fn has(&self, kind: StatusKind) -> bool {
        self.effects
            .iter()
            .any(|e| e.kind == kind && e.remaining > 0)
    }

    /// Remaining rounds of a status effect, if active.
    pub fn remaining(&self, kind: StatusKind) -> Option<u8> {
        self.effects
            .iter()
            .find(|e| e.kind == kind && e.remaining > 0)
            .map(|e| e.remaining)
    }

    /// Adds a status effect lasting `rounds` rounds.
    ///
    /// If the effect already exists, the longer duration wins. Returns `false`
    /// when the set is full and the effect could not be stored.
    pub fn add(&mut self, kind: StatusKind, rounds: u8) -> bool {
        if rounds == 0 {
            return false;
        }

        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.remaining = existing.remaining.max(rounds);
            return true;
        }

        self.effects
            .try_push(StatusEffect {
                kind,
                remaining: rounds,
            })
            .is_ok()
    }

    /// Removes a status effect immediately.
    pub fn remove(&mut self, kind: StatusKind) {
        self.effects.retain(|e| e.kind != kind);
    }

    /// Advances every effect by one round and drops the expired ones.
    ///
    /// Returns the effects that were active during the round that just ended,
    /// so the caller can apply damage over time or regeneration.
    pub fn tick_round(&mut self) -> Vec<StatusEffect> {
        let active: Vec<StatusEffect> = self.effects.iter().copied().collect();
        for effect in self.effects.iter_mut() {
            effect.remaining = effect.remaining.saturating_sub(1);
        }
        self.effects.retain(|e| e.remaining > 0);
        active
    }

    /// Returns an iterator over all active effects.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter().filter(|e| e.remaining > 0)
    }

    /// Returns true if no status effects are active.
    pub fn is_empty(&self) -> bool {
        !self.effects.iter().any(|e| e.remaining > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_longer_duration() {
        let mut statuses = StatusEffects::empty();
        assert!(statuses.add(StatusKind::Poisoned, 3));
        assert!(statuses.add(StatusKind::Poisoned, 1));
        assert_eq!(statuses.remaining(StatusKind::Poisoned), Some(3));
        assert!(statuses.add(StatusKind::Poisoned, 5));
        assert_eq!(statuses.remaining(StatusKind::Poisoned), Some(5));
    }

    #[test]
    fn tick_round_expires_effects() {
        let mut statuses = StatusEffects::empty();
        statuses.add(StatusKind::Stunned, 1);
        statuses.add(StatusKind::Burning, 2);

        let active = statuses.tick_round();
        assert_eq!(active.len(), 2);
        assert!(!statuses.has(StatusKind::Stunned));
        assert!(statuses.has(StatusKind::Burning));

        statuses.tick_round();
        assert!(statuses.is_empty());
    }

    #[test]
    fn full_set_rejects_new_kinds() {
        use strum::IntoEnumIterator;

        let mut statuses = StatusEffects::empty();
        let mut stored = 0;
        for kind in StatusKind::iter() {
            if statuses.add(kind, 2) {
                stored += 1;
            }
        }
        assert_eq!(stored, CombatConfig::MAX_STATUS_EFFECTS);
    }

    #[test]
    fn classification_is_disjoint() {
        use strum::IntoEnumIterator;

        for kind in StatusKind::iter() {
            let buckets = [
                kind.is_crowd_control(),
                kind.is_damage_over_time(),
                kind.is_beneficial(),
            ];
            assert!(buckets.iter().filter(|b| **b).count() <= 1, "{kind}");
        }
    }
}
