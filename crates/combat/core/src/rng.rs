//! Injected dice for every random draw in the combat core.
//!
//! Nothing in this crate constructs a generator on its own. Callers hand a
//! `&mut impl Dice` down the call chain, which keeps every resolution
//! reproducible: the same seed replays the same fight.
//!
//! Three sources are provided:
//!
//! - [`PcgDice`]: seedable PCG-XSH-RR, the default for simulations and tests
//! - [`RandDice`]: adapter over any [`rand::Rng`]
//! - [`ScriptedDice`]: replays a fixed sequence, for forcing exact rolls

use std::collections::VecDeque;

/// Source of bounded random integers.
///
/// Only [`Dice::next_u32`] is required; the helpers derive from it.
pub trait Dice {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.range(1, sides.max(1))
    }

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Used for every percentage gate (fumbles, status chances, ladder rules).
    fn roll_d100(&mut self) -> u32 {
        self.range(1, 100)
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }

    /// Percentage check: passes when a d100 lands at or under `percent`.
    ///
    /// `0` never passes and `100` (or more) always passes. Both extremes still
    /// consume a draw so the sequence position does not depend on the value.
    fn chance(&mut self, percent: u32) -> bool {
        self.roll_d100() <= percent
    }

    /// Uniform index in `0..len`. Returns `None` for an empty slice.
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.range(0, (len - 1) as u32) as usize)
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        (**self).range(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output. Same seed, same
/// sequence, on every platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgDice {
    state: u64,
}

impl PcgDice {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        // Mix the seed once so small seeds (0, 1, 2...) do not start
        // from nearly identical states.
        let mut state = seed ^ 0x9e3779b97f4a7c15;
        state ^= state >> 33;
        state = state.wrapping_mul(0xff51afd7ed558ccd);
        state ^= state >> 33;
        Self { state }
    }

    /// Advance the LCG state by one step.
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Dice for PcgDice {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::step(self.state);
        Self::output(self.state)
    }
}

/// Adapter exposing any [`rand::Rng`] as [`Dice`].
///
/// Ranges are drawn with `gen_range`, so they are unbiased.
#[derive(Clone, Debug)]
pub struct RandDice<R>(pub R);

impl<R: rand::Rng> Dice for RandDice<R> {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.0.gen_range(min..=max)
    }
}

/// Dice that replay a fixed script of results.
///
/// Each scripted value is returned verbatim from [`Dice::range`] after being
/// clamped into the requested bounds, so `ScriptedDice::new([12])` makes the
/// next d20 land on 12 and the next d100 on 12. When the script runs dry the
/// lowest value of the range is returned, which passes every percentage check
/// with a non-zero chance.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    script: VecDeque<u32>,
    draws: usize,
}

impl ScriptedDice {
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
            draws: 0,
        }
    }

    /// Append more values to the end of the script.
    pub fn push(&mut self, value: u32) {
        self.script.push_back(value);
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Dice for ScriptedDice {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.script.pop_front().unwrap_or(0)
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        self.draws += 1;
        match self.script.pop_front() {
            Some(value) => value.clamp(min, max.max(min)),
            None => min,
        }
    }
}
