//! Core attributes and resource pools supplied by the caller.
//!
//! Core stats are the only attributes the combat core reads directly; every
//! modifier and difficulty is derived from them on demand and never stored.

/// Primary attributes of a combatant.
///
/// - **strength**: melee accuracy
/// - **dexterity**: ranged accuracy and evasion
/// - **constitution**: toughness (used by callers for health pools)
/// - **intelligence**: arcane spell accuracy
/// - **wisdom**: divine spell accuracy and healing
///
/// 10 is the human baseline and contributes nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreStats {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub level: i32,
}

impl CoreStats {
    /// Baseline attribute value with a zero modifier.
    pub const BASELINE: i32 = 10;

    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        level: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            level,
        }
    }

    /// Piecewise attribute term measured from the baseline.
    ///
    /// ```text
    /// score > 20 : +5 + (score - 20) / 4
    /// score > 10 : (score - 10) / 2
    /// score < 10 : -((10 - score + 1) / 2)
    /// ```
    ///
    /// # Example
    /// ```
    /// # use combat_core::CoreStats;
    /// assert_eq!(CoreStats::attribute_term(10), 0);
    /// assert_eq!(CoreStats::attribute_term(15), 2);
    /// assert_eq!(CoreStats::attribute_term(28), 7);
    /// assert_eq!(CoreStats::attribute_term(7), -2);
    /// ```
    pub fn attribute_term(score: i32) -> i32 {
        const SOFT_CAP: i32 = 20;
        if score > SOFT_CAP {
            (SOFT_CAP - Self::BASELINE) / 2 + (score - SOFT_CAP) / 4
        } else if score >= Self::BASELINE {
            (score - Self::BASELINE) / 2
        } else {
            -((Self::BASELINE - score + 1) / 2)
        }
    }
}

impl Default for CoreStats {
    /// All attributes at baseline, level 1.
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 1)
    }
}

/// Integer resource meter (health, mana) tracked per actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// A meter at its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Amount missing from the maximum.
    pub fn missing(&self) -> u32 {
        self.maximum.saturating_sub(self.current)
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// True when `current / maximum < ratio`.
    ///
    /// An empty maximum never counts as below anything.
    pub fn is_below(&self, ratio: Ratio) -> bool {
        if self.maximum == 0 {
            return false;
        }
        ratio.exceeds_share(self.current, self.maximum)
    }

    /// Remove up to `amount`, returning what was actually removed.
    pub fn drain(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.current);
        self.current -= taken;
        taken
    }

    /// Add up to `amount` without exceeding the maximum, returning what was added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let added = amount.min(self.missing());
        self.current += added;
        added
    }
}

/// Integer fraction used for health thresholds (`1/3`, `1/5`).
///
/// Comparisons are done by cross-multiplication so no floating point enters
/// a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ratio {
    pub numerator: u32,
    pub denominator: u32,
}

impl Ratio {
    pub const ONE_FIFTH: Self = Self::new(1, 5);
    pub const ONE_THIRD: Self = Self::new(1, 3);
    pub const ONE_HALF: Self = Self::new(1, 2);

    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// True when `value / total` falls strictly under this fraction.
    pub fn exceeds_share(&self, value: u32, total: u32) -> bool {
        if self.denominator == 0 {
            return false;
        }
        (value as u64) * (self.denominator as u64) < (total as u64) * (self.numerator as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_term_is_monotonic() {
        let terms: Vec<i32> = (1..=40).map(CoreStats::attribute_term).collect();
        assert!(terms.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(CoreStats::attribute_term(9), -1);
        assert_eq!(CoreStats::attribute_term(8), -1);
        assert_eq!(CoreStats::attribute_term(20), 5);
        assert_eq!(CoreStats::attribute_term(24), 6);
    }

    #[test]
    fn meter_ratio_checks() {
        let meter = ResourceMeter::new(10, 100);
        assert!(meter.is_below(Ratio::ONE_FIFTH));
        assert!(meter.is_below(Ratio::ONE_THIRD));

        let meter = ResourceMeter::new(20, 100);
        assert!(!meter.is_below(Ratio::ONE_FIFTH));

        let empty = ResourceMeter::new(0, 0);
        assert!(!empty.is_below(Ratio::ONE_HALF));
    }

    #[test]
    fn ratio_share_is_strict() {
        assert!(Ratio::ONE_FIFTH.exceeds_share(19, 100));
        assert!(!Ratio::ONE_FIFTH.exceeds_share(20, 100));
        assert!(!Ratio::ONE_FIFTH.exceeds_share(21, 100));
    }

    #[test]
    fn drain_and_restore_are_capped() {
        let mut meter = ResourceMeter::new(5, 20);
        assert_eq!(meter.drain(8), 5);
        assert_eq!(meter.current, 0);
        assert_eq!(meter.restore(50), 20);
        assert_eq!(meter.current, 20);
    }
}
