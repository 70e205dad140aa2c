//! Data-driven combat content and loaders.
//!
//! This crate houses the static combat data and the loaders that read it from
//! RON/TOML files:
//! - Ability catalog (data-driven via RON)
//! - Decision ladder for automated combatants (data-driven via RON)
//! - Combat tunables (data-driven via TOML)
//! - Preset combatants for headless duels (data-driven via RON)
//!
//! Every default data file is embedded in the binary, so callers that do not
//! ship their own content can still build a working engine.
//!
//! All loaders use combat-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, LadderLoader, RosterLoader};
