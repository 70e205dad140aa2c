//! One full action: lookup → refusal checks → roll → effect → ledger update.

use crate::actor::{ActorId, Combatant, StatusKind};
use crate::catalog::{AbilityCatalog, AbilityDefinition, AbilityId};
use crate::config::CombatConfig;
use crate::effect::{EffectExecutor, EffectResult};
use crate::error::{CombatError, ErrorSeverity};
use crate::proficiency::{ProficiencyLedger, SkillId, WeaponSkill};
use crate::rng::Dice;
use crate::roll::{ModifierBreakdown, RollOutcome, RollResolver, evasion};

/// Why an action was refused. Nothing is rolled or spent on refusal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionRefusal {
    #[error("{actor} is stunned")]
    Stunned { actor: ActorId },

    #[error("{actor} is silenced and cannot cast {ability}")]
    Silenced { actor: ActorId, ability: AbilityId },

    #[error("{ability} needs {required} mana, {actor} has {available}")]
    InsufficientMana {
        actor: ActorId,
        ability: AbilityId,
        required: u32,
        available: u32,
    },

    #[error("{actor} has no valid target")]
    NoTarget { actor: ActorId },
}

impl CombatError for ActionRefusal {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoTarget { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Stunned { .. } => "action_stunned",
            Self::Silenced { .. } => "action_silenced",
            Self::InsufficientMana { .. } => "action_insufficient_mana",
            Self::NoTarget { .. } => "action_no_target",
        }
    }
}

/// An ability use to resolve.
#[derive(Clone, Copy, Debug)]
pub struct ActionRequest<'a> {
    pub actor: &'a Combatant,
    pub ability: AbilityId,
    /// Candidate targets; the first valid one is primary.
    pub targets: &'a [Combatant],
}

impl<'a> ActionRequest<'a> {
    pub fn new(actor: &'a Combatant, ability: AbilityId, targets: &'a [Combatant]) -> Self {
        Self {
            actor,
            ability,
            targets,
        }
    }
}

/// Everything one resolved action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionReport {
    pub actor: ActorId,
    /// `None` for a plain attack or an unknown ability.
    pub ability: Option<AbilityId>,
    pub skill: Option<SkillId>,
    /// `None` when nothing was resolved (unknown ability).
    pub roll: Option<RollOutcome>,
    pub effect: EffectResult,
    pub mana_spent: u32,
    /// Whether the skill's tier went up from this use.
    pub improved: bool,
}

impl ActionReport {
    /// Report for an ability the catalog does not know: nothing happens.
    pub fn no_op(actor: ActorId, ability: AbilityId) -> Self {
        Self {
            actor,
            ability: Some(ability),
            skill: None,
            roll: None,
            effect: EffectResult::empty(Some(ability)),
            mana_spent: 0,
            improved: false,
        }
    }

    pub fn fumbled(&self) -> bool {
        self.roll.is_some_and(|roll| roll.is_forced_failure())
    }

    pub fn succeeded(&self) -> bool {
        self.roll.is_some_and(|roll| roll.success)
    }
}

/// Resolves actions against one catalog.
///
/// Built once per encounter; the ledger and dice are passed per call.
#[derive(Clone, Debug)]
pub struct ActionPipeline<'a> {
    catalog: &'a AbilityCatalog,
    resolver: RollResolver,
    executor: EffectExecutor,
    passive_improvement: bool,
}

impl<'a> ActionPipeline<'a> {
    pub fn new(catalog: &'a AbilityCatalog, config: &CombatConfig) -> Self {
        Self {
            catalog,
            resolver: RollResolver::new(config),
            executor: EffectExecutor::new(config),
            passive_improvement: config.passive_improvement,
        }
    }

    pub fn catalog(&self) -> &'a AbilityCatalog {
        self.catalog
    }

    /// Resolve one ability use.
    pub fn resolve(
        &self,
        ledger: &mut ProficiencyLedger,
        request: ActionRequest<'_>,
        dice: &mut impl Dice,
    ) -> Result<ActionReport, ActionRefusal> {
        let actor = request.actor;
        let Some(definition) = self.catalog.get(request.ability) else {
            tracing::debug!(actor = %actor.id, ability = %request.ability, "unknown ability, no-op");
            return Ok(ActionReport::no_op(actor.id, request.ability));
        };

        let targets = select_targets(definition, request.targets);
        check_refusals(actor, definition, &targets)?;

        let skill = definition.skill_for(actor.archetype);
        let tier = ledger.get_tier(actor.id, skill);
        let modifier = ModifierBreakdown::for_attacker(actor, tier).total();

        let roll = match targets.first() {
            Some(primary) if definition.is_opposed() => {
                self.resolver.resolve(modifier, evasion(primary), tier, dice)
            }
            _ => RollOutcome::unopposed(modifier),
        };

        let effect = self
            .executor
            .execute(definition, actor, &targets, tier, &roll, dice);
        let improved = self.learn(ledger, actor.id, skill, &roll, dice);

        Ok(ActionReport {
            actor: actor.id,
            ability: Some(definition.id),
            skill: Some(skill),
            roll: Some(roll),
            effect,
            mana_spent: definition.cost,
            improved,
        })
    }

    /// Resolve a plain weapon attack with the actor's default weapon skill.
    pub fn basic_attack(
        &self,
        ledger: &mut ProficiencyLedger,
        actor: &Combatant,
        target: &Combatant,
        dice: &mut impl Dice,
    ) -> Result<ActionReport, ActionRefusal> {
        if actor.has_status(StatusKind::Stunned) {
            return Err(ActionRefusal::Stunned { actor: actor.id });
        }
        if !target.is_alive() {
            return Err(ActionRefusal::NoTarget { actor: actor.id });
        }

        let skill = SkillId::Weapon(WeaponSkill::default_for(actor.archetype));
        let tier = ledger.get_tier(actor.id, skill);
        let modifier = ModifierBreakdown::for_attacker(actor, tier).total();
        let roll = self.resolver.resolve(modifier, evasion(target), tier, dice);
        let effect = self.executor.plain_attack(actor, target, tier, &roll, dice);
        let improved = self.learn(ledger, actor.id, skill, &roll, dice);

        Ok(ActionReport {
            actor: actor.id,
            ability: None,
            skill: Some(skill),
            roll: Some(roll),
            effect,
            mana_spent: 0,
            improved,
        })
    }

    /// Passive improvement: only a successful use can teach.
    fn learn(
        &self,
        ledger: &mut ProficiencyLedger,
        actor: ActorId,
        skill: SkillId,
        roll: &RollOutcome,
        dice: &mut impl Dice,
    ) -> bool {
        self.passive_improvement && roll.success && ledger.try_improve_from_use(actor, skill, dice)
    }
}

/// Living targets, truncated to one unless the ability hits everyone.
fn select_targets<'t>(
    definition: &AbilityDefinition,
    candidates: &'t [Combatant],
) -> Vec<&'t Combatant> {
    if definition.is_self_targeted() {
        return Vec::new();
    }
    let limit = if definition.is_multi_target() {
        CombatConfig::MAX_TARGETS
    } else {
        1
    };
    candidates
        .iter()
        .filter(|target| target.is_alive())
        .take(limit)
        .collect()
}

fn check_refusals(
    actor: &Combatant,
    definition: &AbilityDefinition,
    targets: &[&Combatant],
) -> Result<(), ActionRefusal> {
    if actor.has_status(StatusKind::Stunned) {
        return Err(ActionRefusal::Stunned { actor: actor.id });
    }
    if definition.is_spell() && actor.has_status(StatusKind::Silenced) {
        return Err(ActionRefusal::Silenced {
            actor: actor.id,
            ability: definition.id,
        });
    }
    if definition.cost > actor.mana.current {
        return Err(ActionRefusal::InsufficientMana {
            actor: actor.id,
            ability: definition.id,
            required: definition.cost,
            available: actor.mana.current,
        });
    }
    if definition.is_opposed() && targets.is_empty() {
        return Err(ActionRefusal::NoTarget { actor: actor.id });
    }
    Ok(())
}
