//! Common error infrastructure for combat-core.
//!
//! Nothing in the combat core panics or raises on a rules outcome: a fumble,
//! a miss or an unknown ability are ordinary data. The error types that do
//! exist describe requests the core refuses before touching any state, and
//! catalog data rejected at load time. Each lives next to the code that
//! produces it; this module holds the shared classification.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the request was refused; a different action may succeed
/// - **Validation**: static data is malformed and must be fixed before use
/// - **Internal**: an invariant the core relies on was violated by the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Refused action - pick another action or wait a round.
    ///
    /// Examples: not enough mana, stunned, silenced spellcaster
    Recoverable,

    /// Invalid static data - reject at load time.
    ///
    /// Examples: inverted magnitude range, status chance over 100%
    Validation,

    /// Caller broke a contract - investigate.
    ///
    /// Examples: opposed ability resolved without any target snapshot
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all combat-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable snake_case identifier for this error variant.
    ///
    /// Used for log fields and test assertions.
    fn error_code(&self) -> &'static str;
}
