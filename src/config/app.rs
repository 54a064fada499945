//! Main application configuration
//!
//! This module defines the top-level configuration for a ratings run,
//! including environment variable loading, TOML files, and validation.

use crate::config::rating::RatingConfig;
use crate::config::resolver::ResolverConfig;
use crate::rating::calculator::validate_brackets;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub resolver: ResolverConfig,
    pub rating: RatingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "season-ratings".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let mut config = Self::parse_toml(&contents)?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse and validate a TOML document; missing sections take defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config = Self::parse_toml(contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    fn parse_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| anyhow!("Invalid configuration TOML: {}", e))
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(strategy) = env::var("RESOLVER_STRATEGY") {
            self.resolver.strategy = strategy
                .parse()
                .map_err(|_| anyhow!("Invalid RESOLVER_STRATEGY value: {}", strategy))?;
        }
        if let Ok(carryover) = env::var("RATING_CARRYOVER") {
            self.rating.carryover = carryover
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_CARRYOVER value: {}", carryover))?;
        }
        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.trim().is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    validate_brackets(&config.rating.brackets, config.rating.overflow_score)?;

    Ok(())
}
