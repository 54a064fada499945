//! Error types for team resolution and season ratings
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate. Callers that need to branch on the failure kind can
//! recover it with `downcast_ref::<RatingsError>()`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific resolution and rating scenarios
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingsError {
    #[error("No team found with canonical name or alias '{name}'")]
    TeamNotFound { name: String },

    #[error("Invalid game record: {reason}")]
    InvalidGameRecord { reason: String },

    #[error("Invalid game date: '{value}'")]
    InvalidDate { value: String },

    #[error("Invalid month abbreviation: '{value}', expected one of jan..dec")]
    InvalidMonth { value: String },

    #[error("Team directory error: {message}")]
    DirectoryError { message: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Game source error: {message}")]
    GameSourceError { message: String },
}

impl RatingsError {
    /// Whether this error means a record should be rejected before rating
    pub fn is_invalid_record(&self) -> bool {
        matches!(
            self,
            RatingsError::InvalidGameRecord { .. }
                | RatingsError::InvalidDate { .. }
                | RatingsError::InvalidMonth { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_team() {
        let err = RatingsError::TeamNotFound {
            name: "Miami (OH)".to_string(),
        };
        assert!(err.to_string().contains("Miami (OH)"));
        assert!(!err.is_invalid_record());
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = RatingsError::InvalidDate {
            value: "soon".to_string(),
        }
        .into();

        let kind = err.downcast_ref::<RatingsError>().unwrap();
        assert!(kind.is_invalid_record());
    }

    #[test]
    fn test_source_failure_is_not_a_record_rejection() {
        let err = RatingsError::GameSourceError {
            message: "Failed to read games.json".to_string(),
        };
        assert!(!err.is_invalid_record());
        assert_eq!(err.to_string(), "Game source error: Failed to read games.json");
    }
}
