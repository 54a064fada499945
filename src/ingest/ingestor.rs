//! Turns raw schedule records into resolved games

use crate::error::{RatingsError, Result};
use crate::ingest::record::{validate_record, RawGameRecord};
use crate::resolver::IdentityResolver;
use crate::types::GameResult;
use tracing::{info, warn};

/// A raw record that could not become a [`GameResult`], with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    pub record: RawGameRecord,
    pub error: RatingsError,
}

/// Outcome of ingesting a batch of raw records
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub games: Vec<GameResult>,
    pub rejected: Vec<RejectedRecord>,
}

impl IngestReport {
    /// True when every record was accepted
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Names that failed to resolve, in the order they were seen
    pub fn unresolved_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for rejected in &self.rejected {
            if let RatingsError::TeamNotFound { name } = &rejected.error {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// All games, or the first rejection as an error
    pub fn into_games_strict(self) -> Result<Vec<GameResult>> {
        match self.rejected.into_iter().next() {
            Some(rejected) => Err(rejected.error.into()),
            None => Ok(self.games),
        }
    }
}

/// Validates raw records and resolves both team names
#[derive(Debug, Clone)]
pub struct GameIngestor {
    resolver: IdentityResolver,
}

impl GameIngestor {
    pub fn new(resolver: IdentityResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    /// Validate one record and resolve its winner and loser
    pub fn resolve_record(&self, record: &RawGameRecord) -> Result<GameResult> {
        let validated = validate_record(record)?;
        let winner_id = self.resolver.resolve_id(&validated.winner_name)?;
        let loser_id = self.resolver.resolve_id(&validated.loser_name)?;

        GameResult::new(
            winner_id,
            loser_id,
            validated.winner_points,
            validated.loser_points,
            validated.date,
        )
    }

    /// Ingest a batch, keeping every rejection alongside the accepted games
    pub fn ingest<I>(&self, records: I) -> IngestReport
    where
        I: IntoIterator<Item = RawGameRecord>,
    {
        let mut report = IngestReport::default();

        for record in records {
            match self.resolve_record(&record) {
                Ok(game) => report.games.push(game),
                Err(err) => {
                    let error = match err.downcast::<RatingsError>() {
                        Ok(error) => error,
                        Err(other) => RatingsError::InvalidGameRecord {
                            reason: other.to_string(),
                        },
                    };
                    warn!("Rejected {} vs {}: {}", record.winner, record.loser, error);
                    report.rejected.push(RejectedRecord { record, error });
                }
            }
        }

        info!(
            "Ingested {} games ({} rejected)",
            report.games.len(),
            report.rejected.len()
        );
        report
    }
}
