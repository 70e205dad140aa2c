//! Effect catalog: the read-only table of ability and spell definitions.
//!
//! A catalog is built once from definitions (usually loaded by
//! `combat-content`), validated, and then only read.

mod ability;

use std::collections::HashMap;

pub use ability::{
    AbilityClass, AbilityDefinition, AbilityFlags, AbilityId, AbilityRole, Magnitude,
    SkillSchool, StatusInfliction,
};

use crate::actor::Archetype;
use crate::error::{CombatError, ErrorSeverity};

/// Catalog data rejected while building an [`AbilityCatalog`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("{id}: magnitude range {min}..={max} is inverted")]
    InvertedMagnitude { id: AbilityId, min: u32, max: u32 },

    #[error("{id}: status chance {chance}% exceeds 100%")]
    StatusChanceTooHigh { id: AbilityId, chance: u32 },

    #[error("{id}: status duration must be at least one round")]
    ZeroStatusDuration { id: AbilityId },

    #[error("{id}: life steal {percent}% exceeds 100%")]
    LifeStealTooHigh { id: AbilityId, percent: u32 },

    #[error("{id}: AI chance {chance}% exceeds 100%")]
    AiChanceTooHigh { id: AbilityId, chance: u32 },

    #[error("{id}: multi-strike needs at least one strike")]
    NoStrikes { id: AbilityId },

    #[error("{id}: defined more than once")]
    DuplicateId { id: AbilityId },
}

impl CombatError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvertedMagnitude { .. } => "catalog_inverted_magnitude",
            Self::StatusChanceTooHigh { .. } => "catalog_status_chance_too_high",
            Self::ZeroStatusDuration { .. } => "catalog_zero_status_duration",
            Self::LifeStealTooHigh { .. } => "catalog_life_steal_too_high",
            Self::AiChanceTooHigh { .. } => "catalog_ai_chance_too_high",
            Self::NoStrikes { .. } => "catalog_no_strikes",
            Self::DuplicateId { .. } => "catalog_duplicate_id",
        }
    }
}

/// Validated ability table keyed by [`AbilityId`].
///
/// Iteration follows definition order, which is also the order the decision
/// ladder walks candidates in.
#[derive(Clone, Debug, Default)]
pub struct AbilityCatalog {
    definitions: Vec<AbilityDefinition>,
    index: HashMap<AbilityId, usize>,
}

impl AbilityCatalog {
    /// Validate and index `definitions`.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = AbilityDefinition>,
    ) -> Result<Self, CatalogError> {
        let definitions: Vec<AbilityDefinition> = definitions.into_iter().collect();
        let mut index = HashMap::with_capacity(definitions.len());

        for (position, definition) in definitions.iter().enumerate() {
            validate(definition)?;
            if index.insert(definition.id, position).is_some() {
                return Err(CatalogError::DuplicateId { id: definition.id });
            }
        }

        Ok(Self { definitions, index })
    }

    /// Look up a definition. `None` means the action is a no-op.
    pub fn get(&self, id: AbilityId) -> Option<&AbilityDefinition> {
        self.index.get(&id).map(|&position| &self.definitions[position])
    }

    pub fn contains(&self, id: AbilityId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbilityDefinition> {
        self.definitions.iter()
    }

    /// Definitions a combatant may use, in catalog order.
    pub fn eligible_for(
        &self,
        archetype: Archetype,
        monster_tier: u8,
        boss: bool,
    ) -> impl Iterator<Item = &AbilityDefinition> {
        self.definitions
            .iter()
            .filter(move |definition| definition.is_available_to(archetype, monster_tier, boss))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn validate(definition: &AbilityDefinition) -> Result<(), CatalogError> {
    let id = definition.id;
    let Magnitude { min, max } = definition.magnitude;
    if min > max {
        return Err(CatalogError::InvertedMagnitude { id, min, max });
    }
    if let Some(status) = definition.status {
        if status.chance > 100 {
            return Err(CatalogError::StatusChanceTooHigh {
                id,
                chance: status.chance,
            });
        }
        if status.duration == 0 {
            return Err(CatalogError::ZeroStatusDuration { id });
        }
    }
    if let Some(percent) = definition.life_steal_percent
        && percent > 100
    {
        return Err(CatalogError::LifeStealTooHigh { id, percent });
    }
    if let Some(chance) = definition.ai_chance
        && chance > 100
    {
        return Err(CatalogError::AiChanceTooHigh { id, chance });
    }
    if let AbilityClass::MultiStrike { strikes: 0 } = definition.class {
        return Err(CatalogError::NoStrikes { id });
    }
    Ok(())
}
