//! Common types used throughout the resolution and rating pipeline

use crate::error::{RatingsError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable opaque identifier for a team (e.g. "S00627")
pub type TeamId = String;

/// A team known to the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDirectoryEntry {
    /// Primary display form, unique within the directory
    pub canonical_name: String,
    /// Alternate spellings in the order the data owner listed them.
    /// Fragments keep any leading space they were stored with.
    #[serde(default)]
    pub aliases: Vec<String>,
    pub id: TeamId,
}

impl TeamDirectoryEntry {
    pub fn new(
        canonical_name: impl Into<String>,
        aliases: Vec<String>,
        id: impl Into<TeamId>,
    ) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            aliases,
            id: id.into(),
        }
    }
}

/// Row shape used by the historical directory table, where the aliases
/// column is a single comma-joined string that may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryRow {
    pub canonical_name: String,
    #[serde(default)]
    pub aliases: Option<String>,
    pub id: TeamId,
}

impl From<DirectoryRow> for TeamDirectoryEntry {
    fn from(row: DirectoryRow) -> Self {
        let aliases = match row.aliases.as_deref() {
            None | Some("") => Vec::new(),
            Some(joined) => joined
                .split(',')
                .filter(|fragment| *fragment != " " && !fragment.is_empty())
                .map(str::to_string)
                .collect(),
        };

        Self {
            canonical_name: row.canonical_name,
            aliases,
            id: row.id,
        }
    }
}

/// One completed contest with both teams already resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner_id: TeamId,
    pub loser_id: TeamId,
    pub winner_points: u32,
    pub loser_points: u32,
    pub date: NaiveDate,
}

impl GameResult {
    /// Build a game, enforcing the score invariants of a completed contest
    pub fn new(
        winner_id: impl Into<TeamId>,
        loser_id: impl Into<TeamId>,
        winner_points: u32,
        loser_points: u32,
        date: NaiveDate,
    ) -> Result<Self> {
        if winner_points < loser_points {
            return Err(RatingsError::InvalidGameRecord {
                reason: format!(
                    "winner scored {} but loser scored {}",
                    winner_points, loser_points
                ),
            }
            .into());
        }

        if winner_points == 0 && loser_points == 0 {
            return Err(RatingsError::InvalidGameRecord {
                reason: "0-0 score means the game was not played".to_string(),
            }
            .into());
        }

        Ok(Self {
            winner_id: winner_id.into(),
            loser_id: loser_id.into(),
            winner_points,
            loser_points,
            date,
        })
    }

    /// Margin of victory (never negative)
    pub fn margin(&self) -> u32 {
        self.winner_points.saturating_sub(self.loser_points)
    }
}
