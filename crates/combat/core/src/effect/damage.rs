//! Damage scaling and mitigation.

use crate::actor::{Combatant, StatusKind};

// ============================================================================
// Scaling
// ============================================================================

/// Extra outgoing damage while Berserk, as a percentage.
pub const BERSERK_BONUS_PERCENT: u32 = 50;

/// Scale a base magnitude by tier and degree multipliers.
///
/// # Formula
///
/// ```text
/// scaled = base * tier_percent / 100 * degree_percent / 100
/// ```
///
/// Computed in one step so intermediate rounding does not compound.
pub fn scale_magnitude(base: u32, tier_percent: u32, degree_percent: u32) -> u32 {
    let scaled = base as u64 * tier_percent as u64 * degree_percent as u64 / 10_000;
    scaled.min(u32::MAX as u64) as u32
}

/// Apply the attacker's Berserk bonus, if any.
pub fn berserk_bonus(attacker: &Combatant, damage: u32) -> u32 {
    if attacker.has_status(StatusKind::Berserk) {
        damage.saturating_add((damage as u64 * BERSERK_BONUS_PERCENT as u64 / 100) as u32)
    } else {
        damage
    }
}

// ============================================================================
// Mitigation
// ============================================================================

/// Percentage of incoming damage a Shielded target ignores.
pub const SHIELD_REDUCTION_PERCENT: u32 = 50;

/// Total damage reduction of `defender` against `attacker`, as a percentage
/// capped at 100.
///
/// ```text
/// reduction = (shielded ? 50 : 0) + armor_power / 2
/// ```
///
/// A Berserk attacker ignores every reduction, shield included.
pub fn reduction_percent(attacker: &Combatant, defender: &Combatant) -> u32 {
    if attacker.has_status(StatusKind::Berserk) {
        return 0;
    }
    let shield = if defender.has_status(StatusKind::Shielded) {
        SHIELD_REDUCTION_PERCENT
    } else {
        0
    };
    (shield + defender.armor_power / 2).min(100)
}

/// Reduce incoming damage by a percentage.
///
/// Any positive incoming damage leaves at least 1 point, even at 100%
/// reduction. Zero stays zero.
///
/// # Example
/// ```
/// # use combat_core::effect::mitigate;
/// assert_eq!(mitigate(10, 50), 5);
/// assert_eq!(mitigate(10, 100), 1);
/// assert_eq!(mitigate(0, 30), 0);
/// ```
pub fn mitigate(incoming: u32, reduction_percent: u32) -> u32 {
    if incoming == 0 {
        return 0;
    }
    let kept = 100 - reduction_percent.min(100);
    let reduced = (incoming as u64 * kept as u64 / 100) as u32;
    reduced.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{ActorId, Archetype};

    #[test]
    fn mitigation_never_drops_below_one() {
        for incoming in 1..=50 {
            for reduction in 0..=100 {
                assert!(mitigate(incoming, reduction) >= 1);
            }
        }
        assert_eq!(mitigate(1, 250), 1);
    }

    #[test]
    fn scaling_multiplies_both_factors() {
        assert_eq!(scale_magnitude(10, 100, 100), 10);
        assert_eq!(scale_magnitude(10, 50, 200), 10);
        assert_eq!(scale_magnitude(9, 125, 150), 16);
        assert_eq!(scale_magnitude(10, 180, 0), 0);
    }

    #[test]
    fn shield_and_armor_stack_up_to_cap() {
        let knight = Combatant::new(ActorId(3), "Knight", Archetype::Warrior)
            .with_equipment(0, 20)
            .with_status(StatusKind::Shielded, 2);
        let orc = Combatant::new(ActorId(4), "Orc", Archetype::Humanoid);
        assert_eq!(reduction_percent(&orc, &knight), 60);

        let fortress = knight.with_equipment(0, 200);
        assert_eq!(reduction_percent(&orc, &fortress), 100);
    }

    #[test]
    fn berserk_attacker_ignores_shield_and_armor() {
        let knight = Combatant::new(ActorId(3), "Knight", Archetype::Warrior)
            .with_equipment(0, 40)
            .with_status(StatusKind::Shielded, 2);
        let raging = Combatant::new(ActorId(4), "Orc", Archetype::Humanoid)
            .with_status(StatusKind::Berserk, 3);

        assert_eq!(reduction_percent(&raging, &knight), 0);
    }

    #[test]
    fn berserk_adds_half_again() {
        let calm = Combatant::new(ActorId(4), "Orc", Archetype::Humanoid);
        assert_eq!(berserk_bonus(&calm, 10), 10);

        let raging = calm.with_status(StatusKind::Berserk, 3);
        assert_eq!(berserk_bonus(&raging, 10), 15);
        assert_eq!(berserk_bonus(&raging, 5), 7);
    }
}
