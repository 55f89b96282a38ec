//! Prediction rows and next-fixture alignment.
//!
//! Predictions arrive as one row per player per upcoming fixture round. The
//! pool for "k rounds ahead" keeps each player's k-th upcoming round, so a
//! player with a blank round is aligned on their own fixture list rather than
//! the calendar.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::DomainError;
use super::id::PlayerId;
use super::money::Cost;
use super::player::{Player, Position};
use super::pool::PlayerPool;

/// One predicted fixture for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(alias = "element")]
    pub id: PlayerId,
    pub round: u32,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub points_cumulative: Option<f64>,
    pub position: Position,
    #[serde(alias = "web_name")]
    pub name: String,
    #[serde(alias = "name_own_team")]
    pub club: String,
    #[serde(alias = "now_cost")]
    pub cost: Cost,
}

/// All prediction rows for the remaining season.
#[derive(Debug, Clone, Default)]
pub struct PredictionSet {
    records: Vec<PredictionRecord>,
}

impl PredictionSet {
    #[must_use]
    pub fn new(records: Vec<PredictionRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last round that must be finished before predictions apply.
    ///
    /// `None` when there are no rows or the earliest row is round 0.
    #[must_use]
    pub fn previous_round(&self) -> Option<u32> {
        self.records
            .iter()
            .map(|r| r.round)
            .min()
            .and_then(|first| first.checked_sub(1))
    }

    /// Build the pool for the `round_ahead`-th upcoming fixture of each player.
    ///
    /// Rows sharing (player, round) collapse to the last one seen, which is
    /// how double rounds arrive upstream. Players whose aligned row has no
    /// cumulative prediction are left out.
    pub fn pool_for(&self, round_ahead: u32) -> Result<PlayerPool, DomainError> {
        if round_ahead == 0 {
            return Err(DomainError::ZeroRoundAhead);
        }

        let mut by_player: BTreeMap<PlayerId, BTreeMap<u32, &PredictionRecord>> =
            BTreeMap::new();
        for record in &self.records {
            by_player
                .entry(record.id)
                .or_default()
                .insert(record.round, record);
        }

        let mut players = Vec::new();
        let mut skipped = 0usize;
        for rounds in by_player.values() {
            let Some(record) = rounds.values().nth(round_ahead as usize - 1) else {
                continue;
            };
            let Some(points_cumulative) = record.points_cumulative else {
                skipped += 1;
                continue;
            };
            players.push(Player {
                id: record.id,
                name: record.name.clone(),
                club: record.club.clone(),
                position: record.position,
                cost: record.cost,
                points: record.points.unwrap_or(0.0),
                points_cumulative,
            });
        }

        debug!(
            round_ahead,
            players = players.len(),
            skipped,
            "Aligned predictions on next fixture"
        );
        PlayerPool::try_new(players)
    }
}
