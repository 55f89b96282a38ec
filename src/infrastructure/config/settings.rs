//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for per-user values like `FPLOPT_TEAM_ID`.
//!
//! # Example
//!
//! ```no_run
//! use fplopt::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::data::DataConfig;
use super::fpl::FplConfig;
use super::logging::LoggingConfig;
use super::optimiser::OptimiserConfig;
use crate::error::{ConfigError, Result};

/// Environment variable overriding `fpl.team_id`.
pub const TEAM_ID_ENV: &str = "FPLOPT_TEAM_ID";

/// Main application configuration.
///
/// Every section has defaults, so an empty file (or no file) is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Solver limits and selection rules.
    #[serde(default)]
    pub optimiser: OptimiserConfig,

    /// Remote picks API.
    #[serde(default)]
    pub fpl: FplConfig,

    /// Input files.
    #[serde(default)]
    pub data: DataConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies environment overrides before validating.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - An environment override cannot be parsed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` when given, otherwise defaults plus environment overrides.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    #[allow(clippy::result_large_err)]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::parse_toml(""),
        }
    }

    #[allow(clippy::result_large_err)]
    fn apply_env(&mut self) -> Result<()> {
        if let Ok(raw) = std::env::var(TEAM_ID_ENV) {
            let team_id = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "FPLOPT_TEAM_ID",
                reason: format!("'{raw}' is not a team id"),
            })?;
            self.fpl.team_id = Some(team_id);
        }
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be 'pretty' or 'json'".to_string(),
            }
            .into());
        }
        if self.optimiser.club_cap == 0 {
            return Err(ConfigError::InvalidValue {
                field: "club_cap",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.optimiser.solver_time_limit_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "solver_time_limit_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.fpl.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if !self.fpl.api_url.starts_with("http://") && !self.fpl.api_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: "must be an http(s) URL".to_string(),
            }
            .into());
        }
        if self.fpl.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.data.predictions.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "predictions",
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
