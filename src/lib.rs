//! Season Ratings - team identity resolution and margin-of-victory ratings
//!
//! This crate resolves free-text team names from schedule data to canonical
//! directory entries, and accumulates a season of game results into a
//! zero-sum rating table that can be carried into the next season.

pub mod config;
pub mod directory;
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod rating;
pub mod resolver;
pub mod season;
pub mod telemetry;
pub mod types;

// Re-export commonly used types and traits
pub use error::{RatingsError, Result};
pub use types::*;

// Re-export key components
pub use directory::{DirectorySource, TeamDirectory};
pub use ingest::{GameIngestor, GameSource, IngestReport, RawGameRecord};
pub use pipeline::{SeasonOutcome, SeasonPipeline};
pub use rating::{RatingEngine, RatingTable};
pub use resolver::{AliasMatcher, IdentityResolver, MatchStrategy};
pub use season::SeasonWindow;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
