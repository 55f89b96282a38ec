//! The two optimisation passes and the selection problem they share.
//!
//! - [`FormationSelector`]: best starting XI from the current squad.
//! - [`TransferPlanner`]: best reachable lineup given a transfer allowance.

mod formation;
mod problem;
mod transfer;

pub use formation::{FormationChoice, FormationScore, FormationSelector};
pub use problem::{Selection, SelectionProblem};
pub use transfer::{TransferLimits, TransferOutcome, TransferPlanner};
