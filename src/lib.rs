//! fplopt - fantasy football lineup and transfer optimisation.
//!
//! Two integer programs, run in sequence:
//!
//! 1. **Formation pass** - for each legal formation, pick the best 11 of the
//!    manager's 15 and keep the highest-scoring formation.
//! 2. **Transfer pass** - over every eligible player, pick the best 11 in
//!    that formation within budget, at most three per club, keeping all but
//!    `n_transfers` of the current starters.
//!
//! # Modules
//!
//! - [`domain`] - Players, pools, formations, lineups and transfer diffs
//! - [`port`] - Solver and squad-source traits
//! - [`application`] - The two passes and the recommendation use case
//! - [`adapter`] - HiGHS solver, fantasy API client, file inputs and CLI
//! - [`infrastructure`] - Configuration and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use fplopt::adapter::outbound::file::load_predictions;
//! use fplopt::adapter::outbound::solver::HiGHSSolver;
//! use fplopt::application::selection::FormationSelector;
//! use fplopt::domain::{PlayerId, Squad, LEGAL_FORMATIONS};
//!
//! # fn main() -> fplopt::error::Result<()> {
//! let pool = load_predictions("predictions.json")?.pool_for(1)?;
//! let squad = Squad::try_new((1..=15).map(PlayerId::new).collect())?;
//! let choice = FormationSelector::new(Arc::new(HiGHSSolver::new()))
//!     .select(&squad, &pool, &LEGAL_FORMATIONS)?;
//! println!("{} scores {:.1}", choice.formation, choice.score);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
