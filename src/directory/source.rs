//! Directory source interface and implementations
//!
//! Sources hand over the complete set of teams in one call; partial or
//! streaming directories are not supported.

use crate::error::{RatingsError, Result};
use crate::types::{DirectoryRow, TeamDirectoryEntry};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Trait for loading the full team directory
#[cfg_attr(test, mockall::automock)]
pub trait DirectorySource: Send + Sync {
    /// Load every known team
    fn load_entries(&self) -> Result<Vec<TeamDirectoryEntry>>;
}

/// In-memory directory source
#[derive(Debug, Clone, Default)]
pub struct StaticDirectorySource {
    entries: Vec<TeamDirectoryEntry>,
}

impl StaticDirectorySource {
    pub fn new(entries: Vec<TeamDirectoryEntry>) -> Self {
        Self { entries }
    }

    /// Build from historical rows with comma-joined aliases
    pub fn from_rows(rows: Vec<DirectoryRow>) -> Self {
        Self::new(rows.into_iter().map(TeamDirectoryEntry::from).collect())
    }
}

impl DirectorySource for StaticDirectorySource {
    fn load_entries(&self) -> Result<Vec<TeamDirectoryEntry>> {
        Ok(self.entries.clone())
    }
}

/// A record in a JSON directory file: either an entry with an alias list or
/// a historical row with a comma-joined alias string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonRecord {
    Entry(TeamDirectoryEntry),
    Row(DirectoryRow),
}

impl From<JsonRecord> for TeamDirectoryEntry {
    fn from(record: JsonRecord) -> Self {
        match record {
            JsonRecord::Entry(entry) => entry,
            JsonRecord::Row(row) => row.into(),
        }
    }
}

/// Directory source backed by a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonDirectorySource {
    path: PathBuf,
}

impl JsonDirectorySource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse a JSON array of directory records
    pub fn parse(contents: &str) -> Result<Vec<TeamDirectoryEntry>> {
        let records: Vec<JsonRecord> =
            serde_json::from_str(contents).map_err(|e| RatingsError::DirectoryError {
                message: format!("Malformed directory JSON: {}", e),
            })?;

        Ok(records.into_iter().map(TeamDirectoryEntry::from).collect())
    }
}

impl DirectorySource for JsonDirectorySource {
    fn load_entries(&self) -> Result<Vec<TeamDirectoryEntry>> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| RatingsError::DirectoryError {
                message: format!("Failed to read {}: {}", self.path.display(), e),
            })?;

        let entries = Self::parse(&contents)?;
        info!(
            "Loaded {} teams from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }
}
