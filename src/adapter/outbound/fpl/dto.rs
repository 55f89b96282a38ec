//! Wire types for the picks endpoint.

use serde::Deserialize;

use crate::domain::{cost_from_tenths, PlayerId, Squad};
use crate::error::Result;
use crate::port::outbound::squad::SquadSnapshot;

/// `GET /entry/{team}/event/{round}/picks/`
#[derive(Debug, Deserialize)]
pub struct PicksResponse {
    pub picks: Vec<Pick>,
    pub entry_history: EntryHistory,
}

#[derive(Debug, Deserialize)]
pub struct Pick {
    pub element: u32,
    /// Slot 1-15; 12-15 are the bench.
    #[serde(default)]
    pub position: u8,
}

#[derive(Debug, Deserialize)]
pub struct EntryHistory {
    /// Money in the bank, in tenths.
    pub bank: i64,
}

impl PicksResponse {
    /// Convert into a validated snapshot.
    pub fn into_snapshot(self) -> Result<SquadSnapshot> {
        let ids = self.picks.iter().map(|p| PlayerId::new(p.element)).collect();
        Ok(SquadSnapshot {
            squad: Squad::try_new(ids)?,
            bank: cost_from_tenths(self.entry_history.bank),
        })
    }
}
