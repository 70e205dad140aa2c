//! One rung of the decision ladder.

use crate::actor::Ratio;
use crate::catalog::{AbilityDefinition, AbilityRole};

use super::DecisionContext;

/// Precondition a rule checks before rolling anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    Always,
    SelfHealthBelow(Ratio),
    TargetHealthBelow(Ratio),
    RoundIs(u32),
    RoundAtMost(u32),
}

impl Condition {
    pub fn holds(&self, ctx: &DecisionContext<'_>) -> bool {
        match *self {
            Self::Always => true,
            Self::SelfHealthBelow(ratio) => ctx.actor.health.is_below(ratio),
            Self::TargetHealthBelow(ratio) => ctx.target.health.is_below(ratio),
            Self::RoundIs(round) => ctx.round == round,
            Self::RoundAtMost(round) => ctx.round <= round,
        }
    }
}

/// Probability a rule commits once its condition holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChanceSpec {
    Fixed(u32),
    /// The ability's own `ai_chance`, or the given default.
    PerAbility(u32),
}

impl ChanceSpec {
    pub fn percent_for(&self, definition: &AbilityDefinition) -> u32 {
        match *self {
            Self::Fixed(percent) => percent,
            Self::PerAbility(default) => definition.ai_chance.unwrap_or(default),
        }
    }
}

/// Extra per-candidate filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gate {
    #[default]
    None,
    /// Skip abilities whose status the target already carries.
    TargetLacksStatus,
}

impl Gate {
    pub fn admits(&self, definition: &AbilityDefinition, ctx: &DecisionContext<'_>) -> bool {
        match self {
            Self::None => true,
            Self::TargetLacksStatus => definition
                .status
                .is_none_or(|status| !ctx.target.has_status(status.kind)),
        }
    }
}

/// How a rule turns its candidates into one pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pick {
    /// Roll the chance for each candidate in catalog order; first pass wins.
    #[default]
    EachInOrder,
    /// Roll the chance once, then choose uniformly among the candidates.
    Uniform,
}

/// A ladder rule: if `when` holds, offer abilities of `role` that pass `gate`,
/// committing with probability `chance`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub name: String,
    pub when: Condition,
    pub chance: ChanceSpec,
    pub role: AbilityRole,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gate: Gate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pick: Pick,
}

impl Rule {
    pub fn new(name: impl Into<String>, role: AbilityRole, chance: ChanceSpec) -> Self {
        Self {
            name: name.into(),
            when: Condition::Always,
            chance,
            role,
            gate: Gate::None,
            pick: Pick::EachInOrder,
        }
    }

    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.when = condition;
        self
    }

    #[must_use]
    pub fn gated(mut self, gate: Gate) -> Self {
        self.gate = gate;
        self
    }

    #[must_use]
    pub fn picking(mut self, pick: Pick) -> Self {
        self.pick = pick;
        self
    }

    /// Whether `definition` is a candidate for this rule in `ctx`.
    pub fn offers(&self, definition: &AbilityDefinition, ctx: &DecisionContext<'_>) -> bool {
        definition.role == self.role && self.gate.admits(definition, ctx)
    }
}
