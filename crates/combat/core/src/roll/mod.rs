//! Roll resolution.
//!
//! One call to [`RollResolver::resolve`] produces one [`RollOutcome`]. Misses
//! and fumbles are outcomes, not errors.

mod modifier;
mod outcome;
mod resolver;

pub use modifier::{ModifierBreakdown, evasion, primary_score};
pub use outcome::{Degree, FailureReason, RollOutcome};
pub use resolver::RollResolver;
