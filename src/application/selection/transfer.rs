//! Transfer suggestions for a fixed formation.
//!
//! A single selection problem over the whole pool: the current formation,
//! the budget, a per-club cap, and a retention row that keeps exactly
//! `11 - n_transfers` of the current starters. The transfer plan is the set
//! difference between the old and new lineups.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::problem::SelectionProblem;
use crate::domain::error::DomainError;
use crate::domain::{
    Budget, Lineup, PlayerPool, PointsMetric, Position, TransferPlan, LINEUP_SIZE,
};
use crate::error::{OptimiseError, Result, Stage};
use crate::port::outbound::solver::Solver;

/// Scalar limits for one transfer pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferLimits {
    n_transfers: u8,
    club_cap: u8,
}

impl TransferLimits {
    /// Standard-ruleset cap on starters from one club.
    pub const DEFAULT_CLUB_CAP: u8 = crate::domain::DEFAULT_CLUB_CAP;

    /// Validate limits: at most 11 transfers and a club cap of at least one.
    pub fn try_new(n_transfers: u8, club_cap: u8) -> std::result::Result<Self, DomainError> {
        if n_transfers > LINEUP_SIZE {
            return Err(DomainError::TransferCount {
                requested: n_transfers,
            });
        }
        if club_cap == 0 {
            return Err(DomainError::ZeroClubCap);
        }
        Ok(Self {
            n_transfers,
            club_cap,
        })
    }

    #[must_use]
    pub const fn n_transfers(self) -> u8 {
        self.n_transfers
    }

    #[must_use]
    pub const fn club_cap(self) -> u8 {
        self.club_cap
    }

    /// Starters that must survive the pass.
    #[must_use]
    pub const fn retained(self) -> u8 {
        LINEUP_SIZE - self.n_transfers
    }
}

/// Result of the transfer pass.
#[derive(Debug, Clone, Serialize)]
pub struct TransferOutcome {
    pub lineup: Lineup,
    pub plan: TransferPlan,
    pub score: f64,
}

/// Plans transfers from an existing lineup.
pub struct TransferPlanner {
    solver: Arc<dyn Solver>,
    metric: PointsMetric,
}

impl TransferPlanner {
    #[must_use]
    pub fn new(solver: Arc<dyn Solver>) -> Self {
        Self {
            solver,
            metric: PointsMetric::Cumulative,
        }
    }

    #[must_use]
    pub fn with_metric(mut self, metric: PointsMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Best lineup in `old`'s formation reachable with the given limits.
    ///
    /// # Errors
    ///
    /// [`OptimiseError::DataMismatch`] when a starter is missing from `pool`
    /// or the pool lacks players for some position;
    /// [`OptimiseError::Infeasible`] when budget, club cap and retention
    /// cannot hold together.
    pub fn plan(
        &self,
        old: &Lineup,
        pool: &PlayerPool,
        budget: Budget,
        limits: TransferLimits,
    ) -> Result<TransferOutcome> {
        if let Some(missing) = old.players().iter().find(|p| !pool.contains(p.id)) {
            return Err(OptimiseError::DataMismatch {
                reason: format!("starter {} is not in the prediction pool", missing.id),
            }
            .into());
        }
        let formation = old.formation;
        for position in Position::ALL {
            let available = pool.position_count(position);
            let needed = usize::from(formation.count(position));
            if available < needed {
                return Err(OptimiseError::DataMismatch {
                    reason: format!(
                        "pool has {available} {position} players, formation {formation} needs {needed}"
                    ),
                }
                .into());
            }
        }

        debug!(
            formation = %formation,
            pool = pool.len(),
            budget = %budget.total,
            n_transfers = limits.n_transfers(),
            club_cap = limits.club_cap(),
            "Planning transfers"
        );

        let selection = SelectionProblem::maximise(pool.players(), self.metric)
            .with_formation(formation)
            .with_budget(budget.total)
            .with_club_cap(limits.club_cap())
            .with_retained(&old.ids(), limits.retained())
            .solve(self.solver.as_ref(), Stage::Transfer)?;

        let lineup = Lineup::new(formation, selection.players);
        let plan = TransferPlan::between(old, &lineup);

        Ok(TransferOutcome {
            lineup,
            plan,
            score: selection.score,
        })
    }
}
