use std::fmt;

use crate::config::DegreeTable;

/// How far a successful total cleared the difficulty.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Degree {
    Miss,
    Hit,
    Solid,
    Devastating,
    Critical,
}

impl Degree {
    /// Magnitude multiplier for this degree as an integer percentage.
    pub fn multiplier_percent(self, table: &DegreeTable) -> u32 {
        match self {
            Self::Miss => 0,
            Self::Hit => table.hit_percent,
            Self::Solid => table.solid_percent,
            Self::Devastating => table.devastating_percent,
            Self::Critical => table.critical_percent,
        }
    }

    pub fn is_success(self) -> bool {
        !matches!(self, Self::Miss)
    }
}

/// Why a roll failed without being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureReason {
    /// The tier's pre-roll failure gate fired.
    Fumbled,
}

impl FailureReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fumbled => "fumbled out of inexperience",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one resolution attempt.
///
/// `natural` is `None` when no die was drawn: either the pre-roll gate forced
/// a failure (`failure` is set) or the action was unopposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollOutcome {
    pub natural: Option<u32>,
    pub modifier: i32,
    pub total: i32,
    pub difficulty: i32,
    pub success: bool,
    pub critical_success: bool,
    pub critical_failure: bool,
    pub failure: Option<FailureReason>,
    pub degree: Degree,
}

impl RollOutcome {
    /// Outcome of an action that needs no roll (heals, buffs, summons).
    pub fn unopposed(modifier: i32) -> Self {
        Self {
            natural: None,
            modifier,
            total: modifier,
            difficulty: modifier,
            success: true,
            critical_success: false,
            critical_failure: false,
            failure: None,
            degree: Degree::Hit,
        }
    }

    /// Outcome of a roll the pre-roll gate stopped before any draw.
    pub fn forced_failure(modifier: i32, difficulty: i32, reason: FailureReason) -> Self {
        Self {
            natural: None,
            modifier,
            total: modifier,
            difficulty,
            success: false,
            critical_success: false,
            critical_failure: false,
            failure: Some(reason),
            degree: Degree::Miss,
        }
    }

    pub fn is_forced_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// `total - difficulty`; negative on a miss.
    pub fn margin(&self) -> i32 {
        self.total - self.difficulty
    }
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.natural, self.failure) {
            (_, Some(reason)) => write!(f, "{reason}"),
            (None, None) => write!(f, "automatic success"),
            (Some(natural), None) => write!(
                f,
                "{natural} {:+} = {} vs {} ({})",
                self.modifier, self.total, self.difficulty, self.degree
            ),
        }
    }
}
