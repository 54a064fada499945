//! Margin-of-victory season ratings
//!
//! This module provides the game scoring rule, the rating table value type,
//! and the engine that accumulates one season of games into a table.

pub mod calculator;
pub mod engine;
pub mod table;

// Re-export commonly used types
pub use calculator::{margin_of_victory_score, GameScorer, MarginBracket, MarginOfVictoryScorer};
pub use engine::RatingEngine;
pub use table::RatingTable;
