use tracing::{debug, trace};

use crate::actor::StatusKind;
use crate::catalog::{AbilityCatalog, AbilityDefinition, AbilityRole};
use crate::config::{CombatConfig, DecisionTuning};
use crate::rng::Dice;

use super::rule::{Pick, Rule};
use super::{Decision, DecisionContext, Ladder};

/// Rule name reported when the fallback chose a plain attack.
pub const FALLBACK_PLAIN_ATTACK: &str = "plain_attack";
/// Rule name reported when the fallback picked a random ability.
pub const FALLBACK_RANDOM: &str = "random_ability";

/// Picks one action per turn for an automated combatant.
///
/// Holds no per-turn state: every decision is a function of the context and
/// the dice alone.
#[derive(Clone, Debug)]
pub struct DecisionEngine<'a> {
    catalog: &'a AbilityCatalog,
    ladder: Ladder,
    tuning: DecisionTuning,
}

impl<'a> DecisionEngine<'a> {
    pub fn new(catalog: &'a AbilityCatalog, ladder: Ladder, config: &CombatConfig) -> Self {
        Self {
            catalog,
            ladder,
            tuning: config.decision,
        }
    }

    pub fn ladder(&self) -> &Ladder {
        &self.ladder
    }

    /// Abilities the actor could use right now, in catalog order.
    ///
    /// Filters by archetype and tier eligibility, mana, Silenced (no spells)
    /// and Frightened (no ambushes).
    pub fn available(&self, ctx: &DecisionContext<'_>) -> Vec<&'a AbilityDefinition> {
        let actor = ctx.actor;
        let silenced = actor.has_status(StatusKind::Silenced);
        let frightened = actor.has_status(StatusKind::Frightened);

        self.catalog
            .eligible_for(actor.archetype, actor.monster_tier, actor.boss)
            .filter(|definition| definition.cost <= actor.mana.current)
            .filter(|definition| !(silenced && definition.is_spell()))
            .filter(|definition| !(frightened && definition.role == AbilityRole::Ambush))
            .collect()
    }

    pub fn decide(&self, ctx: &DecisionContext<'_>, dice: &mut impl Dice) -> Decision {
        self.decide_traced(ctx, dice).0
    }

    /// Like [`decide`](Self::decide), also naming the rule that fired.
    pub fn decide_traced(&self, ctx: &DecisionContext<'_>, dice: &mut impl Dice) -> (Decision, &str) {
        let available = self.available(ctx);

        for rule in self.ladder.iter() {
            if !rule.when.holds(ctx) {
                continue;
            }
            if let Some(definition) = self.evaluate(rule, &available, ctx, dice) {
                debug!(
                    actor = %ctx.actor.id,
                    round = ctx.round,
                    rule = %rule.name,
                    ability = %definition.id,
                    "ladder rule fired"
                );
                return (Decision::UseAbility(definition.id), rule.name.as_str());
            }
        }

        if dice.chance(self.tuning.plain_attack_percent) {
            debug!(actor = %ctx.actor.id, round = ctx.round, "fallback plain attack");
            return (Decision::PlainAttack, FALLBACK_PLAIN_ATTACK);
        }

        match dice.pick_index(available.len()) {
            Some(index) => {
                let id = available[index].id;
                debug!(actor = %ctx.actor.id, round = ctx.round, ability = %id, "fallback random ability");
                (Decision::UseAbility(id), FALLBACK_RANDOM)
            }
            None => (Decision::PlainAttack, FALLBACK_PLAIN_ATTACK),
        }
    }

    fn evaluate(
        &self,
        rule: &Rule,
        available: &[&'a AbilityDefinition],
        ctx: &DecisionContext<'_>,
        dice: &mut impl Dice,
    ) -> Option<&'a AbilityDefinition> {
        let mut candidates = available
            .iter()
            .copied()
            .filter(|definition| rule.offers(definition, ctx));

        match rule.pick {
            Pick::EachInOrder => candidates.find(|definition| {
                let percent = rule.chance.percent_for(definition);
                let passed = dice.chance(percent);
                trace!(rule = %rule.name, ability = %definition.id, percent, passed, "ladder check");
                passed
            }),
            Pick::Uniform => {
                let pool: Vec<&'a AbilityDefinition> = candidates.collect();
                let first = pool.first()?;
                let percent = rule.chance.percent_for(first);
                let passed = dice.chance(percent);
                trace!(rule = %rule.name, candidates = pool.len(), percent, passed, "ladder check");
                if !passed {
                    return None;
                }
                dice.pick_index(pool.len()).map(|index| pool[index])
            }
        }
    }
}
