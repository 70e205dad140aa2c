use crate::actor::{Combatant, Ratio, StatusEffect};
use crate::catalog::{AbilityClass, AbilityDefinition, Magnitude, StatusInfliction};
use crate::config::{CombatConfig, DegreeTable};
use crate::proficiency::Tier;
use crate::rng::Dice;
use crate::roll::RollOutcome;

use super::damage::{berserk_bonus, mitigate, reduction_percent, scale_magnitude};
use super::{EffectResult, TargetHit};

/// Turns a roll outcome plus a definition into concrete numbers.
///
/// Every magnitude is drawn once per resolution. Targets of a multi-target
/// ability share that one draw; only mitigation and status checks are per
/// target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectExecutor {
    degrees: DegreeTable,
}

/// Everything a strike needs, whether it comes from a catalog entry or a
/// bare weapon.
struct Strike {
    magnitude: Magnitude,
    class: AbilityClass,
    status: Option<StatusInfliction>,
    life_steal_percent: u32,
}

impl Strike {
    fn of(definition: &AbilityDefinition) -> Self {
        Self {
            magnitude: definition.magnitude,
            class: definition.class,
            status: definition.status,
            life_steal_percent: definition.life_steal_percent.unwrap_or(0),
        }
    }

    fn weapon(power: u32) -> Self {
        Self {
            magnitude: weapon_magnitude(power),
            class: AbilityClass::Damage,
            status: None,
            life_steal_percent: 0,
        }
    }
}

/// Damage range of a plain attack with a weapon of `power`.
pub fn weapon_magnitude(power: u32) -> Magnitude {
    let bonus = power / 2;
    Magnitude::new(1 + bonus, 4 + bonus)
}

impl EffectExecutor {
    pub fn new(config: &CombatConfig) -> Self {
        Self {
            degrees: config.degrees,
        }
    }

    /// Resolve the effect of `definition`.
    ///
    /// `targets` must already be the valid targets; self-targeted abilities
    /// ignore them. A failed outcome yields an empty result: no damage and no
    /// status, whatever the status chance.
    pub fn execute(
        &self,
        definition: &AbilityDefinition,
        caster: &Combatant,
        targets: &[&Combatant],
        tier: Tier,
        outcome: &RollOutcome,
        dice: &mut impl Dice,
    ) -> EffectResult {
        let mut result = EffectResult::empty(Some(definition.id));
        if !outcome.success {
            return result;
        }

        match definition.class {
            AbilityClass::Damage
            | AbilityClass::Finisher
            | AbilityClass::LifeSteal
            | AbilityClass::MultiStrike { .. } => {
                self.strike(&Strike::of(definition), caster, targets, tier, outcome, dice, &mut result);
            }
            AbilityClass::ManaDrain => {
                self.drain(definition, caster, targets, tier, outcome, dice, &mut result);
            }
            AbilityClass::Heal => {
                let amount = tier.scale(definition.magnitude.roll(dice));
                result.healing = amount.min(caster.health.missing());
            }
            AbilityClass::Buff => {}
            AbilityClass::Summon => {
                result.summoned = definition.magnitude.roll(dice);
            }
            AbilityClass::Flee => {
                result.fled = true;
            }
        }

        if definition.is_self_targeted() {
            result.self_status = inflict(definition.status, dice);
        }

        result
    }

    /// Resolve a plain weapon attack against one target.
    pub fn plain_attack(
        &self,
        attacker: &Combatant,
        target: &Combatant,
        tier: Tier,
        outcome: &RollOutcome,
        dice: &mut impl Dice,
    ) -> EffectResult {
        let mut result = EffectResult::empty(None);
        if outcome.success {
            let strike = Strike::weapon(attacker.weapon_power);
            self.strike(&strike, attacker, &[target], tier, outcome, dice, &mut result);
        }
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn strike(
        &self,
        strike: &Strike,
        caster: &Combatant,
        targets: &[&Combatant],
        tier: Tier,
        outcome: &RollOutcome,
        dice: &mut impl Dice,
        result: &mut EffectResult,
    ) {
        let strikes = match strike.class {
            AbilityClass::MultiStrike { strikes } => strikes.max(1),
            _ => 1,
        };
        let base = strike.magnitude.roll(dice);
        let per_strike = scale_magnitude(
            base,
            tier.multiplier_percent(),
            outcome.degree.multiplier_percent(&self.degrees),
        )
        .max(1);
        let raw = berserk_bonus(caster, per_strike.saturating_mul(strikes as u32));

        for target in targets {
            let current = target.health.current;
            let damage = if strike.class == AbilityClass::Finisher
                && target.health.is_below(Ratio::ONE_FIFTH)
            {
                current
            } else {
                mitigate(raw, reduction_percent(caster, target))
            };

            let mut hit = TargetHit::new(target.id);
            hit.damage = damage.min(current);
            hit.status = inflict(strike.status, dice);
            result.hits.push(hit);
        }
        result.strikes = strikes;

        if strike.class == AbilityClass::LifeSteal {
            let dealt = result.total_damage();
            let stolen = ((dealt as u64 * strike.life_steal_percent as u64) / 100) as u32;
            result.life_steal = stolen.min(dealt);
            result.healing = result.life_steal.min(caster.health.missing());
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn drain(
        &self,
        definition: &AbilityDefinition,
        caster: &Combatant,
        targets: &[&Combatant],
        tier: Tier,
        outcome: &RollOutcome,
        dice: &mut impl Dice,
        result: &mut EffectResult,
    ) {
        let base = definition.magnitude.roll(dice);
        let amount = scale_magnitude(
            base,
            tier.multiplier_percent(),
            outcome.degree.multiplier_percent(&self.degrees),
        );

        let mut drained = 0u32;
        for target in targets {
            let mut hit = TargetHit::new(target.id);
            hit.mana_drained = amount.min(target.mana.current);
            hit.status = inflict(definition.status, dice);
            drained = drained.saturating_add(hit.mana_drained);
            result.hits.push(hit);
        }
        result.mana_gained = drained.min(caster.mana.missing());
    }
}

/// Per-target status check. Only called after a successful roll.
fn inflict(status: Option<StatusInfliction>, dice: &mut impl Dice) -> Option<StatusEffect> {
    let status = status?;
    dice.chance(status.chance).then_some(StatusEffect {
        kind: status.kind,
        remaining: status.duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{ActorId, Archetype, ArchetypeSet, StatusKind};
    use crate::catalog::{AbilityFlags, AbilityId, AbilityRole};
    use crate::rng::ScriptedDice;
    use crate::roll::{FailureReason, RollResolver};

    fn executor() -> EffectExecutor {
        EffectExecutor::new(&CombatConfig::default())
    }

    fn hit() -> RollOutcome {
        // natural 12 vs 12: plain hit, 100%
        RollResolver::default().evaluate(12, 0, 12)
    }

    fn caster() -> Combatant {
        Combatant::new(ActorId(1), "Caster", Archetype::Undead).with_health(10, 40)
    }

    fn victim(id: u32) -> Combatant {
        Combatant::new(ActorId(id), "Victim", Archetype::Warrior).with_health(40, 40)
    }

    fn ability(id: AbilityId, class: AbilityClass) -> AbilityDefinition {
        AbilityDefinition::new(id, class, AbilityRole::Offensive)
            .for_archetypes(ArchetypeSet::MONSTERS)
            .with_magnitude(6, 6)
    }

    #[test]
    fn finisher_kills_exactly_below_one_fifth() {
        let execute = ability(AbilityId::Execute, AbilityClass::Finisher).with_magnitude(2, 2);
        let dying = victim(2).with_health(15, 100);
        let result = executor().execute(
            &execute,
            &caster(),
            &[&dying],
            Tier::Average,
            &hit(),
            &mut ScriptedDice::default(),
        );
        assert_eq!(result.total_damage(), 15);
        assert_eq!(dying.health.current.saturating_sub(result.total_damage()), 0);
    }

    #[test]
    fn finisher_above_threshold_deals_normal_damage() {
        let execute = ability(AbilityId::Execute, AbilityClass::Finisher);
        let healthy = victim(2).with_health(50, 100);
        let result = executor().execute(
            &execute,
            &caster(),
            &[&healthy],
            Tier::Average,
            &hit(),
            &mut ScriptedDice::default(),
        );
        assert_eq!(result.total_damage(), 6);
    }

    #[test]
    fn damage_scales_with_tier_and_degree() {
        let bolt = ability(AbilityId::FrostBolt, AbilityClass::Damage).with_magnitude(8, 8);
        let critical = RollResolver::default().evaluate(20, 0, 10);
        let result = executor().execute(
            &bolt,
            &caster(),
            &[&victim(2)],
            Tier::Skilled,
            &critical,
            &mut ScriptedDice::default(),
        );
        // 8 * 1.25 * 2.0
        assert_eq!(result.total_damage(), 20);
    }

    #[test]
    fn heavy_mitigation_still_deals_one() {
        let bite = ability(AbilityId::VenomBite, AbilityClass::Damage).with_magnitude(1, 1);
        let fortress = victim(2)
            .with_equipment(0, 200)
            .with_status(StatusKind::Shielded, 3);
        let result = executor().execute(
            &bite,
            &caster(),
            &[&fortress],
            Tier::Untrained,
            &hit(),
            &mut ScriptedDice::default(),
        );
        assert_eq!(result.total_damage(), 1);
    }

    #[test]
    fn berserk_caster_ignores_shield_and_armor() {
        let cleave = ability(AbilityId::Cleave, AbilityClass::Damage).with_magnitude(10, 10);
        let raging = caster().with_status(StatusKind::Berserk, 3);
        let knight = victim(2)
            .with_equipment(0, 20)
            .with_status(StatusKind::Shielded, 2);
        let result = executor().execute(
            &cleave,
            &raging,
            &[&knight],
            Tier::Average,
            &hit(),
            &mut ScriptedDice::default(),
        );
        // 10 * 1.5, nothing mitigated
        assert_eq!(result.total_damage(), 15);

        let calm = executor().execute(
            &cleave,
            &caster(),
            &[&knight],
            Tier::Average,
            &hit(),
            &mut ScriptedDice::default(),
        );
        assert!(calm.total_damage() < 10);
    }

    #[test]
    fn multi_target_shares_one_magnitude_draw() {
        let breath = ability(AbilityId::FireBreath, AbilityClass::Damage)
            .with_magnitude(1, 20)
            .with_flags(AbilityFlags::OPPOSED | AbilityFlags::MULTI_TARGET);
        let (a, b, c) = (victim(2), victim(3), victim(4));
        let mut dice = ScriptedDice::new([9]);
        let result = executor().execute(
            &breath,
            &caster(),
            &[&a, &b, &c],
            Tier::Average,
            &hit(),
            &mut dice,
        );
        assert_eq!(dice.draws(), 1);
        assert_eq!(result.hits.len(), 3);
        assert!(result.hits.iter().all(|h| h.damage == 9));
    }

    #[test]
    fn multi_strike_multiplies_one_computed_strike() {
        let frenzy = ability(AbilityId::Frenzy, AbilityClass::MultiStrike { strikes: 3 });
        let result = executor().execute(
            &frenzy,
            &caster(),
            &[&victim(2)],
            Tier::Average,
            &hit(),
            &mut ScriptedDice::default(),
        );
        assert_eq!(result.total_damage(), 18);
        assert!(result.is_multi_attack());
    }

    #[test]
    fn life_steal_never_exceeds_damage_dealt() {
        let drain = ability(AbilityId::DrainLife, AbilityClass::LifeSteal)
            .with_magnitude(10, 10)
            .with_life_steal(100);
        let nearly_dead = victim(2).with_health(3, 40);
        let result = executor().execute(
            &drain,
            &caster(),
            &[&nearly_dead],
            Tier::Average,
            &hit(),
            &mut ScriptedDice::default(),
        );
        assert_eq!(result.total_damage(), 3);
        assert_eq!(result.life_steal, 3);
        assert_eq!(result.healing, 3);
    }

    #[test]
    fn mana_drain_is_capped_by_target_pool() {
        let leech = ability(AbilityId::ManaLeech, AbilityClass::ManaDrain).with_magnitude(12, 12);
        let mage = victim(2).with_mana(5, 30);
        let caster = caster().with_mana(0, 20);
        let result = executor().execute(
            &leech,
            &caster,
            &[&mage],
            Tier::Average,
            &hit(),
            &mut ScriptedDice::default(),
        );
        assert_eq!(result.hits[0].mana_drained, 5);
        assert_eq!(result.mana_gained, 5);
        assert_eq!(result.total_damage(), 0);
    }

    #[test]
    fn failed_roll_suppresses_status() {
        let bite = ability(AbilityId::VenomBite, AbilityClass::Damage)
            .with_status(StatusKind::Poisoned, 3, 100);
        let fumble = RollOutcome::forced_failure(0, 12, FailureReason::Fumbled);
        let mut dice = ScriptedDice::default();
        let result = executor().execute(
            &bite,
            &caster(),
            &[&victim(2)],
            Tier::Average,
            &fumble,
            &mut dice,
        );
        assert!(result.is_empty());
        assert_eq!(dice.draws(), 0);
    }

    #[test]
    fn status_chance_is_rolled_per_target() {
        let spit = ability(AbilityId::BlindingSpit, AbilityClass::Damage)
            .with_status(StatusKind::Blinded, 2, 50);
        let (a, b) = (victim(2), victim(3));
        // magnitude, then one status check per target
        let mut dice = ScriptedDice::new([6, 30, 80]);
        let result =
            executor().execute(&spit, &caster(), &[&a, &b], Tier::Average, &hit(), &mut dice);
        assert_eq!(
            result.hits[0].status,
            Some(StatusEffect {
                kind: StatusKind::Blinded,
                remaining: 2
            })
        );
        assert_eq!(result.hits[1].status, None);
    }

    #[test]
    fn heal_is_capped_at_missing_health() {
        let regenerate = ability(AbilityId::Regenerate, AbilityClass::Heal)
            .with_magnitude(50, 50)
            .with_flags(AbilityFlags::SELF_TARGET)
            .with_status(StatusKind::Regenerating, 3, 100);
        let result = executor().execute(
            &regenerate,
            &caster(),
            &[],
            Tier::Legendary,
            &RollOutcome::unopposed(0),
            &mut ScriptedDice::default(),
        );
        assert_eq!(result.healing, 30);
        assert_eq!(result.self_status.map(|s| s.kind), Some(StatusKind::Regenerating));
    }

    #[test]
    fn self_buff_rolls_its_chance() {
        let rage =
            AbilityDefinition::new(AbilityId::BerserkRage, AbilityClass::Buff, AbilityRole::Berserk)
                .for_archetypes(ArchetypeSet::MONSTERS)
                .with_flags(AbilityFlags::SELF_TARGET)
                .with_status(StatusKind::Berserk, 3, 40);
        let cast = |roll: u32| {
            executor().execute(
                &rage,
                &caster(),
                &[],
                Tier::Average,
                &RollOutcome::unopposed(0),
                &mut ScriptedDice::new([roll]),
            )
        };
        assert_eq!(cast(41).self_status, None);
        assert_eq!(
            cast(40).self_status,
            Some(StatusEffect {
                kind: StatusKind::Berserk,
                remaining: 3
            })
        );
    }

    #[test]
    fn summon_and_flee_report_flags() {
        let pack = ability(AbilityId::SummonPack, AbilityClass::Summon).with_magnitude(1, 3);
        let result = executor().execute(
            &pack,
            &caster(),
            &[],
            Tier::Average,
            &RollOutcome::unopposed(0),
            &mut ScriptedDice::new([2]),
        );
        assert_eq!(result.summoned, 2);

        let flee = ability(AbilityId::Flee, AbilityClass::Flee);
        let escaped = executor().execute(
            &flee,
            &caster(),
            &[&victim(2)],
            Tier::Average,
            &hit(),
            &mut ScriptedDice::default(),
        );
        assert!(escaped.fled);
    }

    #[test]
    fn plain_attack_uses_weapon_range() {
        let brute = caster().with_equipment(6, 0);
        let result = executor().plain_attack(
            &brute,
            &victim(2),
            Tier::Average,
            &hit(),
            &mut ScriptedDice::new([100]),
        );
        // weapon 6 => 4..=7, scripted draw clamps to 7
        assert_eq!(result.total_damage(), 7);
        assert_eq!(result.ability, None);
    }
}
