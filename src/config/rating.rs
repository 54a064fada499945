//! Rating system configuration

use crate::rating::calculator::{MarginBracket, DEFAULT_BRACKETS, DEFAULT_OVERFLOW_SCORE};
use serde::{Deserialize, Serialize};

/// Margin-of-victory brackets and season chaining
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Inclusive upper margins with their scores, ascending
    pub brackets: Vec<MarginBracket>,
    /// Score for margins beyond the last bracket
    pub overflow_score: f64,
    /// Seed each season from the previous season's final table
    pub carryover: bool,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            brackets: DEFAULT_BRACKETS.to_vec(),
            overflow_score: DEFAULT_OVERFLOW_SCORE,
            carryover: true,
        }
    }
}
