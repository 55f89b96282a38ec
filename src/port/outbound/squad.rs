//! Squad port: where the manager's current roster comes from.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Cost, Squad};
use crate::error::Result;

/// The manager's roster after a finished round, with money left in the bank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquadSnapshot {
    pub squad: Squad,
    pub bank: Cost,
}

/// Source of squad snapshots (remote API, local file, fixtures).
#[async_trait]
pub trait SquadSource: Send + Sync {
    /// Return the source name for logging.
    fn name(&self) -> &'static str;

    /// Fetch the squad `team_id` fielded in the finished round `round`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is unreachable or the payload does not
    /// describe a valid 15-player squad.
    async fn fetch(&self, team_id: u64, round: u32) -> Result<SquadSnapshot>;
}
