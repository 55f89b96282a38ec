//! Optimiser configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::{PointsMetric, TieBreak, DEFAULT_CLUB_CAP};

/// Settings for the two optimisation passes.
#[derive(Debug, Clone, Deserialize)]
pub struct OptimiserConfig {
    /// Maximum starters from a single club (default: 3).
    #[serde(default = "default_club_cap")]
    pub club_cap: u8,
    /// Wall-clock limit for each solve, in seconds (default: 30).
    #[serde(default = "default_solver_time_limit_secs")]
    pub solver_time_limit_secs: u64,
    /// Formation tie-break rule.
    #[serde(default)]
    pub tie_break: TieBreak,
    /// Points the transfer pass maximises.
    #[serde(default)]
    pub transfer_objective: PointsMetric,
}

const fn default_club_cap() -> u8 {
    DEFAULT_CLUB_CAP
}

const fn default_solver_time_limit_secs() -> u64 {
    30
}

impl OptimiserConfig {
    #[must_use]
    pub const fn solver_time_limit(&self) -> Duration {
        Duration::from_secs(self.solver_time_limit_secs)
    }
}

impl Default for OptimiserConfig {
    fn default() -> Self {
        Self {
            club_cap: default_club_cap(),
            solver_time_limit_secs: default_solver_time_limit_secs(),
            tie_break: TieBreak::default(),
            transfer_objective: PointsMetric::default(),
        }
    }
}
