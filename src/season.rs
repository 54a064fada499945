//! Season windows
//!
//! A college football season runs across the new year, so games are grouped
//! into the August 1 through July 31 window that starts in the season's year.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::GameResult;

/// First month of a season window
pub const SEASON_START_MONTH: u32 = 8;

/// August 1 of `start_year` through July 31 of `start_year + 1`, inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeasonWindow {
    pub start_year: i32,
}

impl SeasonWindow {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// The season a given date belongs to
    pub fn for_date(date: NaiveDate) -> Self {
        if date.month() >= SEASON_START_MONTH {
            Self::new(date.year())
        } else {
            Self::new(date.year() - 1)
        }
    }

    /// First day of the window
    pub fn start(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.start_year, SEASON_START_MONTH, 1)
    }

    /// Last day of the window
    pub fn end(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.start_year.checked_add(1)?, SEASON_START_MONTH - 1, 31)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::for_date(date) == *self
    }

    /// The season that follows this one, `None` past the last representable year
    pub fn next(&self) -> Option<Self> {
        self.start_year.checked_add(1).map(Self::new)
    }

    /// Short display form, e.g. "2024-25"
    pub fn label(&self) -> String {
        format!(
            "{}-{:02}",
            self.start_year,
            (i64::from(self.start_year) + 1).rem_euclid(100)
        )
    }

    /// Games from `games` that were played inside this window
    pub fn filter<'a, I>(&self, games: I) -> Vec<GameResult>
    where
        I: IntoIterator<Item = &'a GameResult>,
    {
        games
            .into_iter()
            .filter(|game| self.contains(game.date))
            .cloned()
            .collect()
    }
}

impl std::fmt::Display for SeasonWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
