//! Test fixtures and mock implementations for integration testing

use season_ratings::directory::StaticDirectorySource;
use season_ratings::error::Result;
use season_ratings::ingest::{GameSource, RawGameRecord};
use season_ratings::season::SeasonWindow;
use season_ratings::types::DirectoryRow;
use std::sync::Mutex;

fn row(canonical_name: &str, aliases: Option<&str>, id: &str) -> DirectoryRow {
    DirectoryRow {
        canonical_name: canonical_name.to_string(),
        aliases: aliases.map(str::to_string),
        id: id.to_string(),
    }
}

/// Directory rows as stored in the schools table, aliases comma-joined
pub fn historical_rows() -> Vec<DirectoryRow> {
    vec![
        row(
            "Mississippi St.",
            Some("Mississippi State, Mississippi St, Miss State"),
            "S01134",
        ),
        row("Mississippi", Some("Ole Miss"), "S01135"),
        row("Florida", None, "S00629"),
        row("Florida St.", Some("Florida State, Florida St"), "S00627"),
        row(
            "Florida Int.",
            Some("Florida International, Florida Intl, Fla. International, FIU, "),
            "S00624",
        ),
        row("Indiana", Some(""), "S00827"),
        row(
            "Indiana St.",
            Some("IN State, Indiana State, Indiana St"),
            "S00821",
        ),
    ]
}

pub fn directory_source() -> StaticDirectorySource {
    StaticDirectorySource::from_rows(historical_rows())
}

pub fn record(winner: &str, loser: &str, wp: &str, lp: &str, date: &str) -> RawGameRecord {
    RawGameRecord {
        winner: winner.to_string(),
        loser: loser.to_string(),
        winner_points: wp.to_string(),
        loser_points: lp.to_string(),
        date: date.to_string(),
        ..Default::default()
    }
}

/// Game source that records which windows were requested
#[derive(Debug, Default)]
pub struct RecordingGameSource {
    records: Vec<RawGameRecord>,
    requested: Mutex<Vec<SeasonWindow>>,
}

impl RecordingGameSource {
    pub fn new(records: Vec<RawGameRecord>) -> Self {
        Self {
            records,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Windows requested so far (for testing)
    pub fn requested_windows(&self) -> Vec<SeasonWindow> {
        self.requested
            .lock()
            .map(|windows| windows.clone())
            .unwrap_or_default()
    }
}

impl GameSource for RecordingGameSource {
    fn load_games(&self, window: SeasonWindow) -> Result<Vec<RawGameRecord>> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(window);
        }

        Ok(self
            .records
            .iter()
            .filter(|r| {
                season_ratings::ingest::parse_game_date(&r.date)
                    .map(|d| window.contains(d))
                    .unwrap_or(true)
            })
            .cloned()
            .collect())
    }
}
