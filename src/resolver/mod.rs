//! Identity resolution from free-text team names
//!
//! Raw names are resolved against the [`TeamDirectory`](crate::directory::TeamDirectory)
//! first by exact canonical name, then by alias using a pluggable
//! [`AliasMatcher`] strategy.

pub mod identity;
pub mod matcher;

// Re-export commonly used types
pub use identity::IdentityResolver;
pub use matcher::{AliasMatcher, ExactMatcher, MatchStrategy, NormalizedMatcher, SubstringMatcher};
