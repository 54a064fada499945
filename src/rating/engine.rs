//! Season rating engine
//!
//! Accumulates a season of already-resolved, already-scoped games into a
//! [`RatingTable`]. Every game moves its score from loser to winner, so a
//! season is zero-sum and the result does not depend on game order.

use crate::config::RatingConfig;
use crate::error::Result;
use crate::rating::calculator::{GameScorer, MarginOfVictoryScorer};
use crate::rating::table::RatingTable;
use crate::season::SeasonWindow;
use crate::types::GameResult;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone)]
pub struct RatingEngine {
    scorer: Arc<dyn GameScorer>,
    carryover: bool,
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::new(Arc::new(MarginOfVictoryScorer::default()))
    }
}

impl RatingEngine {
    /// Create an engine that carries ratings between consecutive seasons
    pub fn new(scorer: Arc<dyn GameScorer>) -> Self {
        Self {
            scorer,
            carryover: true,
        }
    }

    /// Create an engine from validated rating settings
    pub fn from_config(config: &RatingConfig) -> Result<Self> {
        let scorer = MarginOfVictoryScorer::new(config.brackets.clone(), config.overflow_score)?;
        Ok(Self::new(Arc::new(scorer)).with_carryover(config.carryover))
    }

    /// Whether [`compute_seasons`](Self::compute_seasons) seeds each season
    /// from the previous one
    pub fn with_carryover(mut self, carryover: bool) -> Self {
        self.carryover = carryover;
        self
    }

    pub fn carryover(&self) -> bool {
        self.carryover
    }

    pub fn scorer(&self) -> &dyn GameScorer {
        self.scorer.as_ref()
    }

    /// Ratings for one season starting from an empty table
    pub fn compute_season_ratings(&self, games: &[GameResult]) -> RatingTable {
        self.accumulate(RatingTable::new(), games)
    }

    /// Ratings for one season seeded from a prior table.
    ///
    /// The prior table is copied; the caller's table is left untouched.
    pub fn compute_season_ratings_with_carryover(
        &self,
        games: &[GameResult],
        prior: &RatingTable,
    ) -> RatingTable {
        self.accumulate(prior.clone(), games)
    }

    /// Rate consecutive seasons in the order given, returning every
    /// season's table. With carryover enabled each season starts from the
    /// previous season's final table.
    pub fn compute_seasons(
        &self,
        seasons: &[(SeasonWindow, Vec<GameResult>)],
    ) -> Vec<(SeasonWindow, RatingTable)> {
        let mut results: Vec<(SeasonWindow, RatingTable)> = Vec::with_capacity(seasons.len());

        for (window, games) in seasons {
            let table = match results.last() {
                Some((_, prior)) if self.carryover => {
                    self.compute_season_ratings_with_carryover(games, prior)
                }
                _ => self.compute_season_ratings(games),
            };
            results.push((*window, table));
        }

        results
    }

    fn accumulate(&self, mut table: RatingTable, games: &[GameResult]) -> RatingTable {
        let started = Instant::now();

        for game in games {
            let score = self.scorer.score_game(game);
            table.transfer(&game.winner_id, &game.loser_id, score);
        }

        info!(
            "Rated {} games across {} teams in {:.3}ms",
            games.len(),
            table.len(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        table
    }
}
