//! Indexed team directory

use crate::directory::source::DirectorySource;
use crate::error::{RatingsError, Result};
use crate::types::{TeamDirectoryEntry, TeamId};
use std::collections::HashMap;
use tracing::debug;

/// Validated, indexed set of directory entries
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    entries: Vec<TeamDirectoryEntry>,
    by_canonical: HashMap<String, usize>,
    by_id: HashMap<TeamId, usize>,
    by_alias: HashMap<String, usize>,
    /// Every alias paired with its owner, in directory order
    alias_order: Vec<(String, usize)>,
}

impl TeamDirectory {
    /// Build a directory, rejecting duplicate names, ids, or shared aliases
    pub fn new(entries: Vec<TeamDirectoryEntry>) -> Result<Self> {
        let mut by_canonical = HashMap::with_capacity(entries.len());
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut by_alias: HashMap<String, usize> = HashMap::new();
        let mut alias_order = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            if entry.canonical_name.is_empty() {
                return Err(RatingsError::DirectoryError {
                    message: format!("Team '{}' has an empty canonical name", entry.id),
                }
                .into());
            }

            if by_canonical
                .insert(entry.canonical_name.clone(), index)
                .is_some()
            {
                return Err(RatingsError::DirectoryError {
                    message: format!("Duplicate canonical name '{}'", entry.canonical_name),
                }
                .into());
            }

            if by_id.insert(entry.id.clone(), index).is_some() {
                return Err(RatingsError::DirectoryError {
                    message: format!("Duplicate team id '{}'", entry.id),
                }
                .into());
            }

            for alias in &entry.aliases {
                match by_alias.get(alias) {
                    Some(&owner) if owner != index => {
                        return Err(RatingsError::DirectoryError {
                            message: format!(
                                "Alias '{}' is claimed by both '{}' and '{}'",
                                alias, entries[owner].canonical_name, entry.canonical_name
                            ),
                        }
                        .into());
                    }
                    Some(_) => {}
                    None => {
                        by_alias.insert(alias.clone(), index);
                    }
                }
                alias_order.push((alias.clone(), index));
            }
        }

        debug!(
            "Indexed team directory: {} teams, {} aliases",
            entries.len(),
            alias_order.len()
        );

        Ok(Self {
            entries,
            by_canonical,
            by_id,
            by_alias,
            alias_order,
        })
    }

    /// Load every entry from a source and index it
    pub fn from_source(source: &dyn DirectorySource) -> Result<Self> {
        Self::new(source.load_entries()?)
    }

    /// Entry whose canonical name is exactly `name`
    pub fn find_canonical(&self, name: &str) -> Option<&TeamDirectoryEntry> {
        self.by_canonical.get(name).map(|&i| &self.entries[i])
    }

    /// Entry owning an alias that is exactly `alias`
    pub fn find_alias_exact(&self, alias: &str) -> Option<&TeamDirectoryEntry> {
        self.by_alias.get(alias).map(|&i| &self.entries[i])
    }

    pub fn get_by_id(&self, id: &str) -> Option<&TeamDirectoryEntry> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// All (alias, owner) pairs in directory order
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &TeamDirectoryEntry)> {
        self.alias_order
            .iter()
            .map(|(alias, i)| (alias.as_str(), &self.entries[*i]))
    }

    /// Entries in the order the source supplied them
    pub fn entries(&self) -> &[TeamDirectoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
