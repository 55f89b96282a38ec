//! Domain types: players, pools, formations, lineups and transfer diffs.
//!
//! Nothing here performs I/O or talks to a solver; it is the typed data the
//! optimisation passes consume and produce.

pub mod constraint;
pub mod error;
pub mod formation;
pub mod id;
pub mod lineup;
pub mod money;
pub mod player;
pub mod pool;
pub mod prediction;

pub use formation::{
    Formation, TieBreak, DEFAULT_CLUB_CAP, LEGAL_FORMATIONS, LINEUP_SIZE, SQUAD_SIZE,
};
pub use id::PlayerId;
pub use lineup::{Budget, Lineup, TransferPlan};
pub use money::{cost_from_tenths, Cost};
pub use player::{Player, PointsMetric, Position};
pub use pool::{PlayerPool, Squad};
pub use prediction::{PredictionRecord, PredictionSet};
