use crate::actor::{ActorId, StatusEffect};
use crate::catalog::AbilityId;

/// What one resolved action did to one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetHit {
    pub target: ActorId,
    /// Health removed, already reduced and clamped to the target's health.
    pub damage: u32,
    pub mana_drained: u32,
    /// Status that landed, if any.
    pub status: Option<StatusEffect>,
}

impl TargetHit {
    pub fn new(target: ActorId) -> Self {
        Self {
            target,
            damage: 0,
            mana_drained: 0,
            status: None,
        }
    }
}

/// Concrete consequence of one resolved action.
///
/// The core never applies this itself; the turn loop writes it back into its
/// own actor state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectResult {
    /// `None` for a plain weapon attack or a no-op.
    pub ability: Option<AbilityId>,
    pub hits: Vec<TargetHit>,
    /// Health restored to the user, capped at what it is missing.
    pub healing: u32,
    /// Health taken from targets by life steal, never more than was dealt.
    pub life_steal: u32,
    /// Mana restored to the user from drained targets.
    pub mana_gained: u32,
    /// Status the user applies to itself.
    pub self_status: Option<StatusEffect>,
    pub summoned: u32,
    pub fled: bool,
    /// Strikes landed on each target (multi-strike abilities).
    pub strikes: u8,
}

impl EffectResult {
    pub fn empty(ability: Option<AbilityId>) -> Self {
        Self {
            ability,
            ..Self::default()
        }
    }

    pub fn total_damage(&self) -> u32 {
        self.hits.iter().map(|hit| hit.damage).sum()
    }

    pub fn is_multi_attack(&self) -> bool {
        self.strikes > 1
    }

    /// True when the action changed nothing at all.
    pub fn is_empty(&self) -> bool {
        self.total_damage() == 0
            && self.hits.iter().all(|hit| hit.status.is_none() && hit.mana_drained == 0)
            && self.healing == 0
            && self.mana_gained == 0
            && self.self_status.is_none()
            && self.summoned == 0
            && !self.fled
    }
}
