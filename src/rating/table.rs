//! Rating table value type
//!
//! A table is an owned map from team id to rating. Teams that have not played
//! are absent and read as 0. Only the engine mutates a table.

use crate::types::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingTable {
    ratings: HashMap<TeamId, f64>,
}

impl RatingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table from stored ratings, e.g. a persisted previous season
    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = (TeamId, f64)>,
    {
        Self {
            ratings: ratings.into_iter().collect(),
        }
    }

    /// Rating for a team, 0 if it has not appeared
    pub fn get(&self, team_id: &str) -> f64 {
        self.ratings.get(team_id).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, team_id: &str) -> bool {
        self.ratings.contains_key(team_id)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TeamId, &f64)> {
        self.ratings.iter()
    }

    /// Sum of every rating
    pub fn total(&self) -> f64 {
        self.ratings.values().sum()
    }

    /// Teams ordered best first; ties broken by id for a stable order
    pub fn standings(&self) -> Vec<(TeamId, f64)> {
        let mut standings: Vec<(TeamId, f64)> = self
            .ratings
            .iter()
            .map(|(id, rating)| (id.clone(), *rating))
            .collect();

        standings.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        standings
    }

    /// Move `score` from the loser to the winner
    pub(crate) fn transfer(&mut self, winner_id: &str, loser_id: &str, score: f64) {
        *self.ratings.entry(winner_id.to_string()).or_insert(0.0) += score;
        *self.ratings.entry(loser_id.to_string()).or_insert(0.0) -= score;
    }
}

impl IntoIterator for RatingTable {
    type Item = (TeamId, f64);
    type IntoIter = std::collections::hash_map::IntoIter<TeamId, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.ratings.into_iter()
    }
}
