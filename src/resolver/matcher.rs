//! Alias matching strategies
//!
//! The historical data matched a raw name anywhere inside a team's alias
//! text, case-sensitively, taking the first team that matched. That remains
//! the default ([`SubstringMatcher`]); stricter strategies can be swapped in
//! without touching resolution or rating code.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Strategy for deciding whether an alias stands for a raw name
pub trait AliasMatcher: Send + Sync + std::fmt::Debug {
    /// Whether `alias` matches the raw name
    fn matches(&self, alias: &str, raw: &str) -> bool;

    /// True when a match requires byte-for-byte equality, which lets the
    /// resolver use the exact alias index instead of scanning
    fn exact_only(&self) -> bool {
        false
    }

    /// Short name for logging
    fn name(&self) -> &'static str;
}

/// Alias contains the raw name (case-sensitive, leading spaces kept).
///
/// First-match-wins over substrings cannot be answered from a hash index, so
/// each lookup that misses the canonical index scans every alias: cost is
/// linear in the directory's alias count.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl AliasMatcher for SubstringMatcher {
    fn matches(&self, alias: &str, raw: &str) -> bool {
        alias.contains(raw)
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}

/// Alias equals the raw name exactly
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl AliasMatcher for ExactMatcher {
    fn matches(&self, alias: &str, raw: &str) -> bool {
        alias == raw
    }

    fn exact_only(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "exact"
    }
}

/// Alias equals the raw name after trimming and ASCII case folding
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedMatcher;

impl AliasMatcher for NormalizedMatcher {
    fn matches(&self, alias: &str, raw: &str) -> bool {
        alias.trim().eq_ignore_ascii_case(raw.trim())
    }

    fn name(&self) -> &'static str {
        "normalized"
    }
}

/// Configurable selection of a built-in matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    #[default]
    Substring,
    Exact,
    Normalized,
}

impl MatchStrategy {
    pub fn matcher(&self) -> Box<dyn AliasMatcher> {
        match self {
            MatchStrategy::Substring => Box::new(SubstringMatcher),
            MatchStrategy::Exact => Box::new(ExactMatcher),
            MatchStrategy::Normalized => Box::new(NormalizedMatcher),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchStrategy::Substring),
            "exact" => Ok(MatchStrategy::Exact),
            "normalized" => Ok(MatchStrategy::Normalized),
            other => Err(anyhow::anyhow!("Unknown match strategy: {}", other)),
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStrategy::Substring => write!(f, "substring"),
            MatchStrategy::Exact => write!(f, "exact"),
            MatchStrategy::Normalized => write!(f, "normalized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_matcher() {
        let matcher = SubstringMatcher;
        assert!(matcher.matches(" Florida St", "Florida St"));
        assert!(matcher.matches("Miami (OH)", "Miami"));
        assert!(!matcher.matches("Florida State", "florida state"));
        assert!(!matcher.exact_only());
    }

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactMatcher;
        assert!(matcher.matches("FIU", "FIU"));
        assert!(!matcher.matches(" FIU", "FIU"));
        assert!(matcher.exact_only());
    }

    #[test]
    fn test_normalized_matcher() {
        let matcher = NormalizedMatcher;
        assert!(matcher.matches(" FIU", "fiu"));
        assert!(!matcher.matches("Miami (OH)", "Miami"));
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "Substring".parse::<MatchStrategy>().unwrap(),
            MatchStrategy::Substring
        );
        assert_eq!(" exact ".parse::<MatchStrategy>().unwrap(), MatchStrategy::Exact);
        assert!("fuzzy".parse::<MatchStrategy>().is_err());
        assert_eq!(MatchStrategy::Normalized.matcher().name(), "normalized");
        assert_eq!(MatchStrategy::default().to_string(), "substring");
    }
}
