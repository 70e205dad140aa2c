//! Effect executor: roll outcome + definition → [`EffectResult`].
//!
//! Numeric policy shared by every effect:
//!
//! - mitigation never takes positive damage below 1
//! - damage is clamped to the target's current health
//! - life steal and mana drain are capped at what was actually taken

mod damage;
mod executor;
mod result;

pub use damage::{mitigate, reduction_percent, scale_magnitude};
pub use executor::{EffectExecutor, weapon_magnitude};
pub use result::{EffectResult, TargetHit};
