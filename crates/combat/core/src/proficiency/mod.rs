//! Proficiency ledger: per-actor skill tiers and training progress.
//!
//! - [`Tier`]: the fixed nine-step ladder and its derived combat numbers
//! - [`ProficiencyLedger`]: side-table keyed by actor and skill identity
//!
//! The ledger is owned by the encounter loop and handed to the
//! [`ActionPipeline`](crate::pipeline::ActionPipeline) by `&mut`; it is never
//! embedded in actor data.

pub mod ledger;
pub mod tier;

pub use ledger::{
    ProficiencyLedger, ProficiencyRecord, SkillId, TrainingPool, TrainingRefusal, WeaponSkill,
};
pub use tier::Tier;
