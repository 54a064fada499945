//! Game scoring trait and the margin-of-victory step function
//!
//! A game moves the same number of points from loser to winner; how many is
//! decided by a [`GameScorer`].

use crate::error::{RatingsError, Result};
use crate::types::GameResult;
use serde::{Deserialize, Serialize};

/// Inclusive upper margin and the score awarded up to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginBracket {
    pub max_margin: u32,
    pub score: f64,
}

impl MarginBracket {
    pub const fn new(max_margin: u32, score: f64) -> Self {
        Self { max_margin, score }
    }
}

/// Default brackets; margins above the last one score [`DEFAULT_OVERFLOW_SCORE`]
pub const DEFAULT_BRACKETS: [MarginBracket; 7] = [
    MarginBracket::new(3, 0.5),
    MarginBracket::new(10, 1.0),
    MarginBracket::new(17, 2.0),
    MarginBracket::new(24, 4.0),
    MarginBracket::new(31, 5.0),
    MarginBracket::new(38, 6.0),
    MarginBracket::new(45, 7.0),
];

pub const DEFAULT_OVERFLOW_SCORE: f64 = 8.0;

/// Score for a single final score under the default brackets
pub fn margin_of_victory_score(winner_points: u32, loser_points: u32) -> f64 {
    score_with(
        &DEFAULT_BRACKETS,
        DEFAULT_OVERFLOW_SCORE,
        winner_points.saturating_sub(loser_points),
    )
}

fn score_with(brackets: &[MarginBracket], overflow_score: f64, margin: u32) -> f64 {
    brackets
        .iter()
        .find(|bracket| margin <= bracket.max_margin)
        .map(|bracket| bracket.score)
        .unwrap_or(overflow_score)
}

/// Trait for scoring a completed game
pub trait GameScorer: Send + Sync + std::fmt::Debug {
    /// Points transferred for a given margin of victory
    fn score_margin(&self, margin: u32) -> f64;

    /// Points transferred by a game
    fn score_game(&self, game: &GameResult) -> f64 {
        self.score_margin(game.margin())
    }
}

/// Monotone step function over the margin of victory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginOfVictoryScorer {
    brackets: Vec<MarginBracket>,
    overflow_score: f64,
}

impl Default for MarginOfVictoryScorer {
    fn default() -> Self {
        Self {
            brackets: DEFAULT_BRACKETS.to_vec(),
            overflow_score: DEFAULT_OVERFLOW_SCORE,
        }
    }
}

impl MarginOfVictoryScorer {
    /// Create a scorer with custom brackets
    pub fn new(brackets: Vec<MarginBracket>, overflow_score: f64) -> Result<Self> {
        validate_brackets(&brackets, overflow_score)?;
        Ok(Self {
            brackets,
            overflow_score,
        })
    }

    pub fn brackets(&self) -> &[MarginBracket] {
        &self.brackets
    }

    pub fn overflow_score(&self) -> f64 {
        self.overflow_score
    }
}

impl GameScorer for MarginOfVictoryScorer {
    fn score_margin(&self, margin: u32) -> f64 {
        score_with(&self.brackets, self.overflow_score, margin)
    }
}

/// Brackets must rise strictly in margin and never fall in score
pub fn validate_brackets(brackets: &[MarginBracket], overflow_score: f64) -> Result<()> {
    if brackets.is_empty() {
        return Err(RatingsError::ConfigurationError {
            message: "At least one margin bracket is required".to_string(),
        }
        .into());
    }

    for bracket in brackets {
        if !bracket.score.is_finite() || bracket.score < 0.0 {
            return Err(RatingsError::ConfigurationError {
                message: format!(
                    "Bracket score {} for margin {} must be finite and non-negative",
                    bracket.score, bracket.max_margin
                ),
            }
            .into());
        }
    }

    for pair in brackets.windows(2) {
        if pair[1].max_margin <= pair[0].max_margin {
            return Err(RatingsError::ConfigurationError {
                message: format!(
                    "Bracket margins must increase: {} follows {}",
                    pair[1].max_margin, pair[0].max_margin
                ),
            }
            .into());
        }
        if pair[1].score < pair[0].score {
            return Err(RatingsError::ConfigurationError {
                message: format!(
                    "Bracket scores must not decrease: {} follows {}",
                    pair[1].score, pair[0].score
                ),
            }
            .into());
        }
    }

    let last = brackets[brackets.len() - 1].score;
    if !overflow_score.is_finite() || overflow_score < last {
        return Err(RatingsError::ConfigurationError {
            message: format!(
                "Overflow score {} must be at least the last bracket score {}",
                overflow_score, last
            ),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bracket_boundaries() {
        let scorer = MarginOfVictoryScorer::default();
        let cases = [
            (0, 0.5),
            (3, 0.5),
            (4, 1.0),
            (10, 1.0),
            (11, 2.0),
            (17, 2.0),
            (18, 4.0),
            (24, 4.0),
            (25, 5.0),
            (31, 5.0),
            (32, 6.0),
            (38, 6.0),
            (39, 7.0),
            (45, 7.0),
            (46, 8.0),
            (100, 8.0),
        ];

        for (margin, expected) in cases {
            assert_eq!(scorer.score_margin(margin), expected, "margin {}", margin);
        }
    }

    #[test]
    fn test_score_from_points() {
        assert_eq!(margin_of_victory_score(27, 10), 2.0);
        assert_eq!(margin_of_victory_score(45, 0), 7.0);
        assert_eq!(margin_of_victory_score(63, 14), 8.0);
    }

    #[test]
    fn test_custom_brackets() {
        let scorer =
            MarginOfVictoryScorer::new(vec![MarginBracket::new(7, 1.0), MarginBracket::new(14, 2.0)], 3.0)
                .unwrap();
        assert_eq!(scorer.score_margin(7), 1.0);
        assert_eq!(scorer.score_margin(8), 2.0);
        assert_eq!(scorer.score_margin(15), 3.0);
    }

    #[test]
    fn test_invalid_brackets() {
        assert!(MarginOfVictoryScorer::new(vec![], 1.0).is_err());
        assert!(MarginOfVictoryScorer::new(
            vec![MarginBracket::new(10, 1.0), MarginBracket::new(10, 2.0)],
            3.0
        )
        .is_err());
        assert!(MarginOfVictoryScorer::new(
            vec![MarginBracket::new(3, 2.0), MarginBracket::new(10, 1.0)],
            3.0
        )
        .is_err());
        assert!(MarginOfVictoryScorer::new(vec![MarginBracket::new(3, 2.0)], 1.0).is_err());
        assert!(MarginOfVictoryScorer::new(vec![MarginBracket::new(3, f64::NAN)], 1.0).is_err());
    }

    proptest! {
        #[test]
        fn prop_score_is_monotone(a in 0u32..200, b in 0u32..200) {
            let scorer = MarginOfVictoryScorer::default();
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scorer.score_margin(low) <= scorer.score_margin(high));
        }

        #[test]
        fn prop_score_is_in_range(margin in any::<u32>()) {
            let score = MarginOfVictoryScorer::default().score_margin(margin);
            prop_assert!((0.5..=8.0).contains(&score));
        }
    }
}
