//! One-on-one duels between automated combatants.
//!
//! The core only reports what an action did; the arena owns copies of both
//! fighters and writes every [`ActionReport`] back into them.

use combat_core::{
    AbilityCatalog, ActionPipeline, ActionReport, ActionRequest, ActorId, CombatConfig,
    Combatant, Decision, DecisionContext, DecisionEngine, Dice, ProficiencyLedger, StatusKind,
};
use tracing::{debug, trace};

/// Health lost per round to each damage-over-time status.
pub const POISON_DAMAGE: u32 = 2;
pub const BLEED_DAMAGE: u32 = 3;
pub const BURN_DAMAGE: u32 = 4;
/// Health restored per round while Regenerating.
pub const REGENERATION: u32 = 3;

/// How a duel ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    Slain { winner: ActorId },
    Fled { actor: ActorId },
    /// Both fighters fell to damage over time in the same round.
    Mutual,
    RoundCap,
}

/// Result of one duel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelOutcome {
    pub ending: Ending,
    pub rounds: u32,
    /// Forced pre-roll failures per fighter, in opening order.
    pub fumbles: [(ActorId, u32); 2],
    /// Actions refused by the pipeline (stunned, silenced, out of mana).
    pub refusals: u32,
    /// Tier-ups earned through passive improvement.
    pub improvements: u32,
}

/// Runs duels with one engine, catalog and round cap.
pub struct Arena<'a> {
    engine: DecisionEngine<'a>,
    pipeline: ActionPipeline<'a>,
    max_rounds: u32,
}

impl<'a> Arena<'a> {
    pub fn new(
        engine: DecisionEngine<'a>,
        catalog: &'a AbilityCatalog,
        config: &CombatConfig,
        max_rounds: u32,
    ) -> Self {
        Self {
            engine,
            pipeline: ActionPipeline::new(catalog, config),
            max_rounds,
        }
    }

    /// Fight until one side dies or flees, or the round cap is hit.
    ///
    /// `fighters[0]` acts first every round.
    pub fn duel(&self, fighters: [&Combatant; 2], dice: &mut impl Dice) -> DuelOutcome {
        let mut fighters = fighters.map(Combatant::clone);
        let mut ledger = ProficiencyLedger::new();
        for fighter in &fighters {
            ledger.register(fighter.id, fighter.archetype);
        }

        let mut outcome = DuelOutcome {
            ending: Ending::RoundCap,
            rounds: 0,
            fumbles: [(fighters[0].id, 0), (fighters[1].id, 0)],
            refusals: 0,
            improvements: 0,
        };

        for round in 1..=self.max_rounds {
            outcome.rounds = round;

            for side in 0..2 {
                let Some(report) = self.take_turn(&mut ledger, &fighters, side, round, dice, &mut outcome)
                else {
                    continue;
                };

                let (actor, foe) = split_sides(&mut fighters, side);
                apply_report(actor, foe, &report);

                if report.effect.fled {
                    debug!(actor = %actor.name, round, "fled");
                    outcome.ending = Ending::Fled { actor: actor.id };
                    return outcome;
                }
                if !foe.is_alive() {
                    debug!(winner = %actor.name, loser = %foe.name, round, "slain");
                    outcome.ending = Ending::Slain { winner: actor.id };
                    return outcome;
                }
            }

            for fighter in &mut fighters {
                tick_statuses(fighter);
            }
            match (fighters[0].is_alive(), fighters[1].is_alive()) {
                (true, true) => {}
                (false, false) => {
                    outcome.ending = Ending::Mutual;
                    return outcome;
                }
                (alive, _) => {
                    let winner = if alive { fighters[0].id } else { fighters[1].id };
                    outcome.ending = Ending::Slain { winner };
                    return outcome;
                }
            }
        }

        outcome
    }

    /// Decide and resolve one action. `None` when the pipeline refused it.
    fn take_turn(
        &self,
        ledger: &mut ProficiencyLedger,
        fighters: &[Combatant; 2],
        side: usize,
        round: u32,
        dice: &mut impl Dice,
        outcome: &mut DuelOutcome,
    ) -> Option<ActionReport> {
        let actor = &fighters[side];
        let foe = &fighters[1 - side];

        let ctx = DecisionContext::new(actor, foe, round);
        let (decision, rule) = self.engine.decide_traced(&ctx, dice);
        trace!(actor = %actor.name, ?decision, rule, round, "decided");

        let resolved = match decision {
            Decision::PlainAttack => self.pipeline.basic_attack(ledger, actor, foe, dice),
            Decision::UseAbility(ability) => self.pipeline.resolve(
                ledger,
                ActionRequest::new(actor, ability, std::slice::from_ref(foe)),
                dice,
            ),
        };

        match resolved {
            Ok(report) => {
                if report.fumbled() {
                    outcome.fumbles[side].1 += 1;
                }
                if report.improved {
                    outcome.improvements += 1;
                }
                Some(report)
            }
            Err(refusal) => {
                debug!(actor = %actor.name, %refusal, round, "action refused");
                outcome.refusals += 1;
                None
            }
        }
    }
}

/// Mutable views of the acting fighter and its opponent.
fn split_sides(fighters: &mut [Combatant; 2], side: usize) -> (&mut Combatant, &mut Combatant) {
    let [first, second] = fighters;
    if side == 0 { (first, second) } else { (second, first) }
}

/// Write one action's consequences into the fighters.
pub fn apply_report(actor: &mut Combatant, foe: &mut Combatant, report: &ActionReport) {
    actor.mana.drain(report.mana_spent);

    let effect = &report.effect;
    for hit in effect.hits.iter().filter(|hit| hit.target == foe.id) {
        foe.health.drain(hit.damage);
        foe.mana.drain(hit.mana_drained);
        if let Some(status) = hit.status {
            foe.statuses.add(status.kind, status.remaining);
        }
    }

    // Life steal is already folded into `healing`.
    actor.health.restore(effect.healing);
    actor.mana.restore(effect.mana_gained);
    if let Some(status) = effect.self_status {
        actor.statuses.add(status.kind, status.remaining);
    }
    if effect.summoned > 0 {
        debug!(actor = %actor.name, count = effect.summoned, "reinforcements arrive");
    }
}

/// End-of-round upkeep: damage over time, regeneration, expiry.
pub fn tick_statuses(fighter: &mut Combatant) {
    for effect in fighter.statuses.tick_round() {
        match effect.kind {
            StatusKind::Poisoned => {
                fighter.health.drain(POISON_DAMAGE);
            }
            StatusKind::Bleeding => {
                fighter.health.drain(BLEED_DAMAGE);
            }
            StatusKind::Burning => {
                fighter.health.drain(BURN_DAMAGE);
            }
            StatusKind::Regenerating if fighter.is_alive() => {
                fighter.health.restore(REGENERATION);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use combat_core::{
        AbilityCatalog, AbilityClass, AbilityDefinition, AbilityFlags, AbilityId, AbilityRole,
        Archetype, ArchetypeSet, EffectResult, Ladder, PcgDice, StatusEffect, TargetHit,
    };

    use super::*;

    fn arena(catalog: &AbilityCatalog, max_rounds: u32) -> Arena<'_> {
        let config = CombatConfig::default();
        let engine = DecisionEngine::new(catalog, Ladder::standard(), &config);
        Arena::new(engine, catalog, &config, max_rounds)
    }

    fn brute(id: u32, name: &str) -> Combatant {
        Combatant::new(ActorId(id), name, Archetype::Beast)
            .with_health(40, 40)
            .with_equipment(6, 0)
    }

    #[test]
    fn plain_attackers_fight_to_a_death() {
        let catalog = AbilityCatalog::default();
        let arena = arena(&catalog, 500);
        let (wolf, bear) = (brute(1, "Wolf"), brute(2, "Bear"));

        let outcome = arena.duel([&wolf, &bear], &mut PcgDice::seeded(3));

        assert!(matches!(outcome.ending, Ending::Slain { .. }));
        assert!(outcome.rounds <= 500);
        assert_eq!(outcome.refusals, 0);
    }

    #[test]
    fn same_seed_replays_the_same_duel() {
        let catalog = AbilityCatalog::default();
        let arena = arena(&catalog, 100);
        let (wolf, bear) = (brute(1, "Wolf"), brute(2, "Bear"));

        let first = arena.duel([&wolf, &bear], &mut PcgDice::seeded(77));
        let second = arena.duel([&wolf, &bear], &mut PcgDice::seeded(77));
        assert_eq!(first, second);
    }

    #[test]
    fn round_cap_ends_a_stalemate() {
        let catalog = AbilityCatalog::default();
        let arena = arena(&catalog, 3);
        let tank = |id| Combatant::new(ActorId(id), "Wall", Archetype::Elemental).with_health(10_000, 10_000);

        let outcome = arena.duel([&tank(1), &tank(2)], &mut PcgDice::seeded(9));

        assert_eq!(outcome.ending, Ending::RoundCap);
        assert_eq!(outcome.rounds, 3);
    }

    #[test]
    fn stunned_fighter_is_refused_every_turn() {
        let catalog = AbilityCatalog::default();
        let arena = arena(&catalog, 5);
        let dazed = brute(1, "Dazed").with_health(10_000, 10_000).with_status(StatusKind::Stunned, 50);
        let idle = Combatant::new(ActorId(2), "Idle", Archetype::Elemental)
            .with_health(10_000, 10_000)
            .with_status(StatusKind::Stunned, 50);

        let outcome = arena.duel([&dazed, &idle], &mut PcgDice::seeded(1));

        assert_eq!(outcome.ending, Ending::RoundCap);
        assert_eq!(outcome.refusals, 10);
    }

    #[test]
    fn fleeing_ends_the_duel() {
        let catalog = AbilityCatalog::from_definitions([AbilityDefinition::new(
            AbilityId::Flee,
            AbilityClass::Flee,
            AbilityRole::Flee,
        )
        .with_flags(AbilityFlags::SELF_TARGET)
        .for_archetypes(ArchetypeSet::BEAST)])
        .unwrap();
        let arena = arena(&catalog, 2_000);
        let coward = brute(1, "Coward").with_health(1, 100);
        let guard = Combatant::new(ActorId(2), "Guard", Archetype::Elemental).with_health(10_000, 10_000);

        // Flee fires at 15% per turn, so some seed in range gets there first.
        let fled = (0..200).any(|seed| {
            arena.duel([&coward, &guard], &mut PcgDice::seeded(seed)).ending
                == Ending::Fled { actor: ActorId(1) }
        });
        assert!(fled);
    }

    #[test]
    fn report_is_written_back() {
        let mut caster = Combatant::new(ActorId(1), "Lich", Archetype::Undead)
            .with_health(20, 40)
            .with_mana(10, 20);
        let mut victim = brute(2, "Knight");

        let mut hit = TargetHit::new(victim.id);
        hit.damage = 12;
        hit.status = Some(StatusEffect {
            kind: StatusKind::Bleeding,
            remaining: 2,
        });
        let report = ActionReport {
            actor: caster.id,
            ability: Some(AbilityId::DrainLife),
            skill: None,
            roll: None,
            effect: EffectResult {
                hits: vec![hit],
                healing: 6,
                life_steal: 6,
                ..EffectResult::empty(Some(AbilityId::DrainLife))
            },
            mana_spent: 3,
            improved: false,
        };

        apply_report(&mut caster, &mut victim, &report);

        assert_eq!(victim.health.current, 28);
        assert_eq!(victim.statuses.remaining(StatusKind::Bleeding), Some(2));
        assert_eq!(caster.health.current, 26);
        assert_eq!(caster.mana.current, 7);
    }

    #[test]
    fn upkeep_applies_damage_over_time_and_regeneration() {
        let mut fighter = brute(1, "Troll")
            .with_health(30, 40)
            .with_status(StatusKind::Poisoned, 1)
            .with_status(StatusKind::Burning, 2)
            .with_status(StatusKind::Regenerating, 2);

        tick_statuses(&mut fighter);
        assert_eq!(fighter.health.current, 30 - POISON_DAMAGE - BURN_DAMAGE + REGENERATION);
        assert!(!fighter.has_status(StatusKind::Poisoned));

        tick_statuses(&mut fighter);
        assert_eq!(fighter.health.current, 27 - BURN_DAMAGE + REGENERATION);
        assert!(fighter.statuses.is_empty());
    }
}
