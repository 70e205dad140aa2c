//! Deterministic combat resolution shared by every turn loop.
//!
//! `combat-core` decides, for any attack, class ability or spell, whether it
//! succeeds and how strong its effect is, and picks the action an automated
//! combatant takes on its turn. It is built from four components:
//!
//! - [`proficiency`]: per-actor, per-skill mastery tiers and training progress
//! - [`catalog`]: the read-only table of ability and spell definitions
//! - [`roll`]: bounded d20 resolution with a pre-roll fumble gate
//! - [`decision`]: the priority ladder used by automated combatants
//!
//! [`effect`] turns roll outcomes into concrete numbers and [`pipeline`]
//! sequences one full action (decision → roll → effect → ledger update).
//! Nothing here owns global state: the catalog, ledger and dice are always
//! passed in explicitly.
pub mod actor;
pub mod catalog;
pub mod config;
pub mod decision;
pub mod effect;
pub mod error;
pub mod pipeline;
pub mod proficiency;
pub mod rng;
pub mod roll;

pub use actor::{
    ActorId, Archetype, ArchetypeSet, Combatant, CoreStats, Ratio, ResourceMeter, StatusEffect,
    StatusEffects, StatusKind,
};
pub use catalog::{
    AbilityCatalog, AbilityClass, AbilityDefinition, AbilityFlags, AbilityId, AbilityRole,
    CatalogError, Magnitude, SkillSchool, StatusInfliction,
};
pub use config::{CombatConfig, DecisionTuning, DegreeTable, RollRules};
pub use decision::{
    ChanceSpec, Condition, Decision, DecisionContext, DecisionEngine, Gate, Ladder, Pick, Rule,
};
pub use effect::{EffectExecutor, EffectResult, TargetHit};
pub use error::{CombatError, ErrorSeverity};
pub use pipeline::{ActionPipeline, ActionRefusal, ActionReport, ActionRequest};
pub use proficiency::{
    ProficiencyLedger, ProficiencyRecord, SkillId, Tier, TrainingPool, TrainingRefusal,
    WeaponSkill,
};
pub use rng::{Dice, PcgDice, RandDice, ScriptedDice};
pub use roll::{Degree, FailureReason, ModifierBreakdown, RollOutcome, RollResolver};
