/// Combat configuration constants and tunable parameters.
///
/// Tunables default to the values the rules were balanced around; content
/// loaders may override them from TOML.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    pub roll: RollRules,
    pub degrees: DegreeTable,
    pub decision: DecisionTuning,
    /// Whether successful uses of a skill may passively improve it.
    pub passive_improvement: bool,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_STATUS_EFFECTS: usize = 8;
    pub const MAX_TARGETS: usize = 8;

    pub fn new() -> Self {
        Self {
            roll: RollRules::default(),
            degrees: DegreeTable::default(),
            decision: DecisionTuning::default(),
            passive_improvement: true,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounds of the natural roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RollRules {
    /// Lowest natural roll; landing here is a critical failure.
    pub natural_min: u32,
    /// Highest natural roll; landing here is a critical success.
    pub natural_max: u32,
}

impl RollRules {
    pub const DEFAULT_NATURAL_MIN: u32 = 1;
    pub const DEFAULT_NATURAL_MAX: u32 = 20;
}

impl Default for RollRules {
    fn default() -> Self {
        Self {
            natural_min: Self::DEFAULT_NATURAL_MIN,
            natural_max: Self::DEFAULT_NATURAL_MAX,
        }
    }
}

/// Margins and magnitude multipliers for each degree of success.
///
/// Multipliers are integer percentages (`125` = ×1.25).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DegreeTable {
    /// Minimum margin over the difficulty for a solid hit.
    pub solid_margin: i32,
    /// Minimum margin over the difficulty for a devastating hit.
    pub devastating_margin: i32,
    pub hit_percent: u32,
    pub solid_percent: u32,
    pub devastating_percent: u32,
    pub critical_percent: u32,
}

impl Default for DegreeTable {
    fn default() -> Self {
        Self {
            solid_margin: 5,
            devastating_margin: 10,
            hit_percent: 100,
            solid_percent: 125,
            devastating_percent: 150,
            critical_percent: 200,
        }
    }
}

/// Decision engine knobs that sit outside the ladder itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecisionTuning {
    /// Chance of a plain attack once no ladder rule fired.
    pub plain_attack_percent: u32,
}

impl Default for DecisionTuning {
    fn default() -> Self {
        Self {
            plain_attack_percent: 60,
        }
    }
}
