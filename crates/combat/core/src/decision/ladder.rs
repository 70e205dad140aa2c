use crate::actor::Ratio;
use crate::catalog::AbilityRole;

use super::rule::{ChanceSpec, Condition, Gate, Pick, Rule};

/// Ordered list of rules, evaluated top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ladder {
    pub rules: Vec<Rule>,
}

impl Ladder {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The ladder automated combatants use unless content overrides it.
    ///
    /// 1. self-heal below 1/3 health (80%)
    /// 2. berserk below 1/3 health (50%)
    /// 3. flee below 1/5 health (15%)
    /// 4. finisher on a target below 1/5 health (70%)
    /// 5. ambush in round 1 (per ability, 40% by default)
    /// 6. summon below 1/2 health (30%)
    /// 7. call for help in rounds 1-2 (20%)
    /// 8. crowd control the target lacks (35%)
    /// 9. damage over time the target lacks (35%)
    /// 10. any offensive ability (40%, uniform pick)
    pub fn standard() -> Self {
        use AbilityRole as R;
        use ChanceSpec::{Fixed, PerAbility};

        Self::new(vec![
            Rule::new("self_heal", R::SelfHeal, Fixed(80))
                .when(Condition::SelfHealthBelow(Ratio::ONE_THIRD)),
            Rule::new("berserk", R::Berserk, Fixed(50))
                .when(Condition::SelfHealthBelow(Ratio::ONE_THIRD)),
            Rule::new("flee", R::Flee, Fixed(15)).when(Condition::SelfHealthBelow(Ratio::ONE_FIFTH)),
            Rule::new("finisher", R::Finisher, Fixed(70))
                .when(Condition::TargetHealthBelow(Ratio::ONE_FIFTH)),
            Rule::new("ambush", R::Ambush, PerAbility(40)).when(Condition::RoundIs(1)),
            Rule::new("summon", R::Summon, Fixed(30))
                .when(Condition::SelfHealthBelow(Ratio::ONE_HALF)),
            Rule::new("call_for_help", R::CallForHelp, Fixed(20)).when(Condition::RoundAtMost(2)),
            Rule::new("crowd_control", R::CrowdControl, Fixed(35)).gated(Gate::TargetLacksStatus),
            Rule::new("damage_over_time", R::DamageOverTime, Fixed(35))
                .gated(Gate::TargetLacksStatus),
            Rule::new("offensive", R::Offensive, Fixed(40)).picking(Pick::Uniform),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Ladder {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_ladder_order() {
        let ladder = Ladder::standard();
        let names: Vec<&str> = ladder.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "self_heal",
                "berserk",
                "flee",
                "finisher",
                "ambush",
                "summon",
                "call_for_help",
                "crowd_control",
                "damage_over_time",
                "offensive",
            ]
        );
    }

    #[test]
    fn gated_rules_are_the_status_rules() {
        let ladder = Ladder::standard();
        let gated: Vec<AbilityRole> = ladder
            .iter()
            .filter(|r| r.gate == Gate::TargetLacksStatus)
            .map(|r| r.role)
            .collect();
        assert_eq!(gated, [AbilityRole::CrowdControl, AbilityRole::DamageOverTime]);
        assert_eq!(ladder.get("offensive").map(|r| r.pick), Some(Pick::Uniform));
    }
}
