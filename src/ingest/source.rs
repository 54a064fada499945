//! Game source interface and implementations
//!
//! Scoping games to a season is the supplier's job: the rating engine never
//! looks at dates.

use crate::error::{RatingsError, Result};
use crate::ingest::record::{parse_game_date, RawGameRecord};
use crate::season::SeasonWindow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Trait for supplying one season's raw game records
pub trait GameSource: Send + Sync {
    /// Records played inside `window`
    fn load_games(&self, window: SeasonWindow) -> Result<Vec<RawGameRecord>>;
}

/// Keep records dated inside the window. Records whose date cannot be
/// parsed are kept so that ingestion reports them instead of losing them.
fn scope_to_window(records: &[RawGameRecord], window: SeasonWindow) -> Vec<RawGameRecord> {
    records
        .iter()
        .filter(|record| match parse_game_date(&record.date) {
            Ok(date) => window.contains(date),
            Err(_) => {
                debug!("Passing through record with unparseable date '{}'", record.date);
                true
            }
        })
        .cloned()
        .collect()
}

/// In-memory game source covering any number of seasons
#[derive(Debug, Clone, Default)]
pub struct StaticGameSource {
    records: Vec<RawGameRecord>,
}

impl StaticGameSource {
    pub fn new(records: Vec<RawGameRecord>) -> Self {
        Self { records }
    }
}

impl GameSource for StaticGameSource {
    fn load_games(&self, window: SeasonWindow) -> Result<Vec<RawGameRecord>> {
        Ok(scope_to_window(&self.records, window))
    }
}

/// Game source backed by a JSON array of raw records on disk
#[derive(Debug, Clone)]
pub struct JsonGameSource {
    path: PathBuf,
}

impl JsonGameSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl GameSource for JsonGameSource {
    fn load_games(&self, window: SeasonWindow) -> Result<Vec<RawGameRecord>> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            RatingsError::GameSourceError {
                message: format!("Failed to read {}: {}", self.path.display(), e),
            }
        })?;

        let records: Vec<RawGameRecord> = serde_json::from_str(&contents)?;
        let scoped = scope_to_window(&records, window);
        info!(
            "Loaded {} of {} records for season {} from {}",
            scoped.len(),
            records.len(),
            window,
            self.path.display()
        );
        Ok(scoped)
    }
}
