//! The nine-step mastery ladder and the combat numbers it drives.
//!
//! | Tier | Modifier | Multiplier | Fumble | Use-improve | To advance |
//! |---|---|---|---|---|---|
//! | Untrained | -2 | 50% | 25% | 10% | 1 |
//! | Poor | -1 | 75% | 15% | 8% | 2 |
//! | Average | 0 | 100% | 10% | 6% | 3 |
//! | Good | +1 | 110% | 6% | 5% | 4 |
//! | Skilled | +2 | 125% | 4% | 4% | 5 |
//! | Expert | +3 | 140% | 2% | 3% | 7 |
//! | Superb | +4 | 160% | 1% | 2% | 10 |
//! | Master | +5 | 180% | 0% | 0% | 15 |
//! | Legendary | +7 | 200% | 0% | 0% | - |
//!
//! Advancement cost grows faster than the modifier, so every extra point of
//! accuracy is more expensive than the last.

/// Proficiency tier, ordered from lowest to highest.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Tier {
    #[default]
    Untrained = 0,
    Poor = 1,
    Average = 2,
    Good = 3,
    Skilled = 4,
    Expert = 5,
    Superb = 6,
    Master = 7,
    Legendary = 8,
}

impl Tier {
    const ROLL_MODIFIERS: [i32; 9] = [-2, -1, 0, 1, 2, 3, 4, 5, 7];
    const MULTIPLIER_PERCENT: [u32; 9] = [50, 75, 100, 110, 125, 140, 160, 180, 200];
    const FORCED_FAILURE_PERCENT: [u32; 9] = [25, 15, 10, 6, 4, 2, 1, 0, 0];
    const USE_IMPROVEMENT_PERCENT: [u32; 9] = [10, 8, 6, 5, 4, 3, 2, 0, 0];
    const THRESHOLDS: [u32; 8] = [1, 2, 3, 4, 5, 7, 10, 15];

    /// Position on the ladder (0 = Untrained, 8 = Legendary).
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// The tier one step up, or `None` at Legendary.
    pub fn next(self) -> Option<Tier> {
        Tier::from_repr(self.ordinal() + 1)
    }

    pub const fn is_max(self) -> bool {
        matches!(self, Self::Legendary)
    }

    /// Flat modifier added to every roll made with this skill.
    pub const fn roll_modifier(self) -> i32 {
        Self::ROLL_MODIFIERS[self as usize]
    }

    /// Effect magnitude multiplier as an integer percentage (50 = ×0.50).
    pub const fn multiplier_percent(self) -> u32 {
        Self::MULTIPLIER_PERCENT[self as usize]
    }

    /// Chance (percent) of fumbling before any roll is drawn.
    pub const fn forced_failure_percent(self) -> u32 {
        Self::FORCED_FAILURE_PERCENT[self as usize]
    }

    /// Chance (percent) that one use of the skill earns a progress point.
    pub const fn use_improvement_percent(self) -> u32 {
        Self::USE_IMPROVEMENT_PERCENT[self as usize]
    }

    /// Progress points needed to leave this tier, `None` at Legendary.
    pub const fn threshold(self) -> Option<u32> {
        match self {
            Self::Legendary => None,
            _ => Some(Self::THRESHOLDS[self as usize]),
        }
    }

    /// Scale a magnitude by this tier's multiplier (integer, rounds down).
    ///
    /// # Example
    /// ```
    /// # use combat_core::Tier;
    /// assert_eq!(Tier::Untrained.scale(9), 4);
    /// assert_eq!(Tier::Skilled.scale(8), 10);
    /// assert_eq!(Tier::Legendary.scale(8), 16);
    /// ```
    pub fn scale(self, magnitude: u32) -> u32 {
        ((magnitude as u64 * self.multiplier_percent() as u64) / 100) as u32
    }
}
