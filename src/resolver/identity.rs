//! Identity resolver
//!
//! Resolution is a pure read against a shared, immutable directory: the same
//! raw name always resolves to the same team while the directory is unchanged.

use crate::directory::TeamDirectory;
use crate::error::{RatingsError, Result};
use crate::resolver::matcher::{AliasMatcher, MatchStrategy, SubstringMatcher};
use crate::types::{TeamDirectoryEntry, TeamId};
use std::sync::Arc;
use tracing::debug;

/// Resolves free-text team names to directory entries
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    directory: Arc<TeamDirectory>,
    matcher: Arc<dyn AliasMatcher>,
}

impl IdentityResolver {
    /// Create a resolver with a specific alias matching strategy
    pub fn new(directory: Arc<TeamDirectory>, matcher: Arc<dyn AliasMatcher>) -> Self {
        Self { directory, matcher }
    }

    /// Create a resolver with the historical substring matching
    pub fn with_default_matcher(directory: Arc<TeamDirectory>) -> Self {
        Self::new(directory, Arc::new(SubstringMatcher))
    }

    /// Create a resolver from a configured strategy
    pub fn with_strategy(directory: Arc<TeamDirectory>, strategy: MatchStrategy) -> Self {
        Self::new(directory, Arc::from(strategy.matcher()))
    }

    pub fn directory(&self) -> &TeamDirectory {
        &self.directory
    }

    /// Resolve a raw name to its canonical name, aliases, and id.
    ///
    /// An exact canonical match wins. Otherwise the first alias, in directory
    /// order, accepted by the matcher decides the team. No match is a
    /// [`RatingsError::TeamNotFound`].
    pub fn resolve(&self, raw_name: &str) -> Result<&TeamDirectoryEntry> {
        if raw_name.trim().is_empty() {
            return Err(not_found(raw_name));
        }

        if let Some(entry) = self.directory.find_canonical(raw_name) {
            debug!("Resolved '{}' by canonical name -> {}", raw_name, entry.id);
            return Ok(entry);
        }

        let by_alias = if self.matcher.exact_only() {
            self.directory.find_alias_exact(raw_name)
        } else {
            self.directory
                .aliases()
                .find(|(alias, _)| self.matcher.matches(alias, raw_name))
                .map(|(_, entry)| entry)
        };

        match by_alias {
            Some(entry) => {
                debug!(
                    "Resolved '{}' by {} alias -> {} ({})",
                    raw_name,
                    self.matcher.name(),
                    entry.canonical_name,
                    entry.id
                );
                Ok(entry)
            }
            None => Err(not_found(raw_name)),
        }
    }

    /// Resolve a raw name straight to its team id
    pub fn resolve_id(&self, raw_name: &str) -> Result<TeamId> {
        self.resolve(raw_name).map(|entry| entry.id.clone())
    }
}

fn not_found(raw_name: &str) -> anyhow::Error {
    RatingsError::TeamNotFound {
        name: raw_name.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::matcher::{ExactMatcher, NormalizedMatcher};

    fn entry(name: &str, aliases: &[&str], id: &str) -> TeamDirectoryEntry {
        TeamDirectoryEntry::new(
            name,
            aliases.iter().map(|a| a.to_string()).collect(),
            id,
        )
    }

    fn directory() -> Arc<TeamDirectory> {
        Arc::new(
            TeamDirectory::new(vec![
                entry("Florida St.", &["Florida State", "Florida St"], "S00627"),
                entry("Florida", &[], "S00629"),
                entry("Miami (OH)", &["Miami Ohio", "Miami (Ohio)"], "S01101"),
                entry("Miami (FL)", &["Miami", " Miami Florida"], "S01100"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_resolve_by_alias() {
        let resolver = IdentityResolver::with_default_matcher(directory());
        let team = resolver.resolve("Florida State").unwrap();

        assert_eq!(team.canonical_name, "Florida St.");
        assert_eq!(team.aliases, vec!["Florida State", "Florida St"]);
        assert_eq!(team.id, "S00627");
    }

    #[test]
    fn test_canonical_name_resolves_to_itself() {
        let resolver = IdentityResolver::with_default_matcher(directory());
        let team = resolver.resolve("Florida").unwrap();

        assert_eq!(team.canonical_name, "Florida");
        assert!(team.aliases.is_empty());
        assert_eq!(resolver.resolve_id("Florida St.").unwrap(), "S00627");
    }

    #[test]
    fn test_first_substring_match_wins() {
        let resolver = IdentityResolver::with_default_matcher(directory());
        // "Miami" is contained in Miami (OH)'s aliases, which come first
        assert_eq!(resolver.resolve_id("Miami").unwrap(), "S01101");
    }

    #[test]
    fn test_exact_matcher_avoids_substring_collision() {
        let resolver = IdentityResolver::new(directory(), Arc::new(ExactMatcher));
        assert_eq!(resolver.resolve_id("Miami").unwrap(), "S01100");
        assert!(resolver.resolve("Miami Florida").is_err());
    }

    #[test]
    fn test_normalized_matcher_ignores_leading_space_and_case() {
        let resolver = IdentityResolver::new(directory(), Arc::new(NormalizedMatcher));
        assert_eq!(resolver.resolve_id("miami florida").unwrap(), "S01100");
    }

    #[test]
    fn test_not_found() {
        let resolver = IdentityResolver::with_default_matcher(directory());
        let err = resolver.resolve("Georgia Tech").unwrap_err();

        assert_eq!(
            err.downcast_ref::<RatingsError>(),
            Some(&RatingsError::TeamNotFound {
                name: "Georgia Tech".to_string()
            })
        );
    }

    #[test]
    fn test_blank_name_is_not_found() {
        let resolver = IdentityResolver::with_default_matcher(directory());
        assert!(resolver.resolve("").is_err());
        assert!(resolver.resolve("   ").is_err());
    }

    #[test]
    fn test_resolution_is_case_sensitive() {
        let resolver = IdentityResolver::with_default_matcher(directory());
        assert!(resolver.resolve("florida state").is_err());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = IdentityResolver::with_strategy(directory(), MatchStrategy::Substring);
        let first = resolver.resolve("Florida St").unwrap().clone();
        let second = resolver.resolve("Florida St").unwrap().clone();
        assert_eq!(first, second);
    }
}
