//! Decision engine for automated combatants.
//!
//! The priority ladder is data: an ordered list of [`Rule`]s, each naming a
//! precondition, a probability and the ability role it offers. The engine
//! walks the ladder top to bottom and the first rule whose condition holds
//! and whose check passes wins. When no rule fires it falls back to a plain
//! attack, and failing that to a uniform pick among available abilities.
//!
//! Checks are rolled per candidate, so a turn may spend several percentage
//! draws before one commits.

mod engine;
mod ladder;
mod rule;

pub use engine::{DecisionEngine, FALLBACK_PLAIN_ATTACK, FALLBACK_RANDOM};
pub use ladder::Ladder;
pub use rule::{ChanceSpec, Condition, Gate, Pick, Rule};

use crate::actor::Combatant;
use crate::catalog::AbilityId;

/// What an automated combatant does this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    PlainAttack,
    UseAbility(AbilityId),
}

/// Everything a decision may look at.
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    pub actor: &'a Combatant,
    pub target: &'a Combatant,
    /// Encounter round, starting at 1.
    pub round: u32,
}

impl<'a> DecisionContext<'a> {
    pub fn new(actor: &'a Combatant, target: &'a Combatant, round: u32) -> Self {
        Self {
            actor,
            target,
            round,
        }
    }
}
