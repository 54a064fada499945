//! Season rating pipeline
//!
//! Wires an injected [`GameSource`] through ingestion and the rating engine:
//! raw records for a season window are validated, both team names resolved,
//! and the surviving games rated.

use crate::config::AppConfig;
use crate::directory::{DirectorySource, TeamDirectory};
use crate::error::Result;
use crate::ingest::{GameIngestor, GameSource, IngestReport};
use crate::rating::{RatingEngine, RatingTable};
use crate::resolver::IdentityResolver;
use crate::season::SeasonWindow;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of rating one season
#[derive(Debug, Clone)]
pub struct SeasonOutcome {
    pub window: SeasonWindow,
    pub ratings: RatingTable,
    /// What ingestion accepted and rejected for this season
    pub report: IngestReport,
}

pub struct SeasonPipeline {
    source: Arc<dyn GameSource>,
    ingestor: GameIngestor,
    engine: RatingEngine,
    strict: bool,
}

impl SeasonPipeline {
    pub fn new(source: Arc<dyn GameSource>, ingestor: GameIngestor, engine: RatingEngine) -> Self {
        Self {
            source,
            ingestor,
            engine,
            strict: false,
        }
    }

    /// Build every component from configuration and the two data sources
    pub fn from_config(
        config: &AppConfig,
        directory_source: &dyn DirectorySource,
        game_source: Arc<dyn GameSource>,
    ) -> Result<Self> {
        let directory = Arc::new(TeamDirectory::from_source(directory_source)?);
        let resolver = IdentityResolver::with_strategy(directory, config.resolver.strategy);
        let engine = RatingEngine::from_config(&config.rating)?;

        Ok(Self::new(game_source, GameIngestor::new(resolver), engine))
    }

    /// Fail a season on its first rejected record instead of skipping it
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn engine(&self) -> &RatingEngine {
        &self.engine
    }

    /// Rate one season, optionally seeded from a prior table
    pub fn run_season(
        &self,
        window: SeasonWindow,
        prior: Option<&RatingTable>,
    ) -> Result<SeasonOutcome> {
        let records = self.source.load_games(window)?;
        let report = self.ingestor.ingest(records);

        if let Some(rejected) = report.rejected.first() {
            if self.strict {
                return Err(rejected.error.clone().into());
            }
            warn!(
                "Season {}: skipping {} rejected records",
                window,
                report.rejected.len()
            );
        }

        let ratings = match prior {
            Some(prior) => self
                .engine
                .compute_season_ratings_with_carryover(&report.games, prior),
            None => self.engine.compute_season_ratings(&report.games),
        };

        info!("Season {}: rated {} teams", window, ratings.len());
        Ok(SeasonOutcome {
            window,
            ratings,
            report,
        })
    }

    /// Rate every season from `first` through `last` inclusive, chaining
    /// tables when the engine carries ratings over
    pub fn run_seasons(&self, first: SeasonWindow, last: SeasonWindow) -> Result<Vec<SeasonOutcome>> {
        let mut outcomes: Vec<SeasonOutcome> = Vec::new();
        let mut window = first;

        while window <= last {
            let prior = match outcomes.last() {
                Some(previous) if self.engine.carryover() => Some(&previous.ratings),
                _ => None,
            };
            let outcome = self.run_season(window, prior)?;
            outcomes.push(outcome);
            window = match window.next() {
                Some(next) => next,
                None => break,
            };
        }

        Ok(outcomes)
    }
}
