//! Raw game records and their validation

use crate::error::{RatingsError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// A game as scraped from a schedule page, before any validation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawGameRecord {
    pub winner: String,
    pub loser: String,
    pub winner_points: String,
    pub loser_points: String,
    /// e.g. "Aug 30, 2025"
    pub date: String,
    #[serde(default)]
    pub week: Option<String>,
    /// "@" when the winner was the road team
    #[serde(default)]
    pub location: Option<String>,
}

/// A record that passed validation but whose team names are still raw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedGame {
    pub winner_name: String,
    pub loser_name: String,
    pub winner_points: u32,
    pub loser_points: u32,
    pub date: NaiveDate,
}

/// Drop a poll ranking prefix such as "(12) " from a team name
pub fn strip_rank_prefix(name: &str) -> &str {
    let name = name.trim_start();
    if name.starts_with('(') {
        if let Some(close) = name.find(')') {
            return name[close + 1..].trim_start();
        }
    }
    name
}

/// Parse a score cell into points
pub fn parse_points(field: &str, value: &str) -> Result<u32> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RatingsError::InvalidGameRecord {
            reason: format!("{} is missing", field),
        }
        .into());
    }

    value.parse::<u32>().map_err(|_| {
        RatingsError::InvalidGameRecord {
            reason: format!("{} '{}' is not a non-negative integer", field, value),
        }
        .into()
    })
}

/// Month number (1-12) from a three letter abbreviation, any case
pub fn month_from_abbreviation(abbreviation: &str) -> Result<u32> {
    let lower = abbreviation.trim().to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32 + 1)
        .ok_or_else(|| {
            RatingsError::InvalidMonth {
                value: abbreviation.to_string(),
            }
            .into()
        })
}

/// Parse a schedule date.
///
/// Accepts "Aug 30, 2025", "Aug 30 2025", "Sat, Aug 30, 2025" and ISO
/// "2025-08-30". A leading weekday must agree with the date.
pub fn parse_game_date(value: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        return Ok(date);
    }

    let normalized = value
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    NaiveDate::parse_from_str(&normalized, "%b %d %Y")
        .or_else(|_| NaiveDate::parse_from_str(&normalized, "%a %b %d %Y"))
        .map_err(|_| {
            RatingsError::InvalidDate {
                value: value.to_string(),
            }
            .into()
        })
}

/// Check a raw record against the invariants of a completed game
pub fn validate_record(record: &RawGameRecord) -> Result<ValidatedGame> {
    let winner_name = strip_rank_prefix(&record.winner).trim_end();
    let loser_name = strip_rank_prefix(&record.loser).trim_end();

    if winner_name.is_empty() || loser_name.is_empty() {
        return Err(RatingsError::InvalidGameRecord {
            reason: "team name is missing".to_string(),
        }
        .into());
    }

    let winner_points = parse_points("winner points", &record.winner_points)?;
    let loser_points = parse_points("loser points", &record.loser_points)?;

    if winner_points == 0 && loser_points == 0 {
        return Err(RatingsError::InvalidGameRecord {
            reason: format!("{} vs {} has no score", winner_name, loser_name),
        }
        .into());
    }

    if winner_points < loser_points {
        return Err(RatingsError::InvalidGameRecord {
            reason: format!(
                "winner {} scored {} but loser {} scored {}",
                winner_name, winner_points, loser_name, loser_points
            ),
        }
        .into());
    }

    let date = parse_game_date(&record.date)?;

    Ok(ValidatedGame {
        winner_name: winner_name.to_string(),
        loser_name: loser_name.to_string(),
        winner_points,
        loser_points,
        date,
    })
}
