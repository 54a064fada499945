//! Game ingestion: the boundary between scraped records and the rating engine
//!
//! Raw records are validated and have both team names resolved here, so the
//! engine only ever sees clean [`GameResult`](crate::types::GameResult)s.
//! Rejections are collected rather than dropped; what to do with them is the
//! caller's decision.

pub mod ingestor;
pub mod record;
pub mod source;

// Re-export commonly used types
pub use ingestor::{GameIngestor, IngestReport, RejectedRecord};
pub use record::{
    month_from_abbreviation, parse_game_date, parse_points, strip_rank_prefix, validate_record,
    RawGameRecord, ValidatedGame,
};
pub use source::{GameSource, JsonGameSource, StaticGameSource};
