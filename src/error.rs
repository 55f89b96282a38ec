use std::time::Duration;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Which optimisation pass an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Picking the best starting XI from the current squad.
    Formation,
    /// Picking the new lineup reachable through transfers.
    Transfer,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formation => f.write_str("formation"),
            Self::Transfer => f.write_str("transfer"),
        }
    }
}

/// Optimisation failures. All are terminal for the current run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimiseError {
    #[error("input data mismatch: {reason}")]
    DataMismatch { reason: String },

    #[error("{stage} problem is infeasible")]
    Infeasible { stage: Stage },

    #[error("{stage} problem is unbounded")]
    Unbounded { stage: Stage },

    #[error("{stage} solve exceeded {limit:?}")]
    SolverTimeout { stage: Stage, limit: Duration },

    #[error("{stage} solve failed: {reason}")]
    SolverFailure { stage: Stage, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Optimise(#[from] OptimiseError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
