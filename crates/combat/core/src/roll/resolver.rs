use crate::config::{CombatConfig, DegreeTable, RollRules};
use crate::proficiency::Tier;
use crate::rng::Dice;

use super::{Degree, FailureReason, RollOutcome};

/// Bounded d20-style resolution with a pre-roll fumble gate.
///
/// Stateless apart from its rules; one resolver is built per encounter and
/// shared by reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RollResolver {
    rules: RollRules,
    degrees: DegreeTable,
}

impl RollResolver {
    pub fn new(config: &CombatConfig) -> Self {
        Self {
            rules: config.roll,
            degrees: config.degrees,
        }
    }

    pub fn rules(&self) -> &RollRules {
        &self.rules
    }

    pub fn degrees(&self) -> &DegreeTable {
        &self.degrees
    }

    /// Resolve one attempt with a skill at `tier`.
    ///
    /// Draw order: the tier's fumble check (skipped entirely at 0%), then the
    /// natural roll. A fumble consumes no natural roll.
    pub fn resolve(
        &self,
        modifier: i32,
        difficulty: i32,
        tier: Tier,
        dice: &mut impl Dice,
    ) -> RollOutcome {
        let fumble_chance = tier.forced_failure_percent();
        if fumble_chance > 0 && dice.chance(fumble_chance) {
            tracing::debug!(%tier, modifier, difficulty, "roll fumbled before the draw");
            return RollOutcome::forced_failure(modifier, difficulty, FailureReason::Fumbled);
        }

        let natural = dice.range(self.rules.natural_min, self.rules.natural_max);
        let outcome = self.evaluate(natural, modifier, difficulty);
        tracing::debug!(
            natural,
            modifier,
            total = outcome.total,
            difficulty,
            degree = %outcome.degree,
            "roll resolved"
        );
        outcome
    }

    /// Classify an already drawn natural roll.
    pub fn evaluate(&self, natural: u32, modifier: i32, difficulty: i32) -> RollOutcome {
        let total = natural as i32 + modifier;
        let success = total >= difficulty;
        let critical_success = natural >= self.rules.natural_max;
        let critical_failure = natural <= self.rules.natural_min;

        RollOutcome {
            natural: Some(natural),
            modifier,
            total,
            difficulty,
            success,
            critical_success,
            critical_failure,
            failure: None,
            degree: self.degree(success, critical_success, total - difficulty),
        }
    }

    fn degree(&self, success: bool, critical: bool, margin: i32) -> Degree {
        if !success {
            Degree::Miss
        } else if critical {
            Degree::Critical
        } else if margin >= self.degrees.devastating_margin {
            Degree::Devastating
        } else if margin >= self.degrees.solid_margin {
            Degree::Solid
        } else {
            Degree::Hit
        }
    }
}
