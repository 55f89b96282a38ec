//! Best starting XI from the current squad.
//!
//! One selection problem per candidate formation, restricted to the squad's
//! 15 players with no cost constraint. The highest-scoring feasible formation
//! wins; formations the squad cannot field are recorded without a score.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::problem::SelectionProblem;
use crate::domain::lineup::sort_for_display;
use crate::domain::{
    Formation, Lineup, Player, PlayerPool, PointsMetric, Squad, TieBreak, SQUAD_SIZE,
};
use crate::error::{Error, OptimiseError, Result, Stage};
use crate::port::outbound::solver::Solver;

/// Score of one candidate formation; `None` when the squad cannot field it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormationScore {
    pub formation: Formation,
    pub score: Option<f64>,
}

/// Result of the formation pass.
#[derive(Debug, Clone, Serialize)]
pub struct FormationChoice {
    pub formation: Formation,
    pub lineup: Lineup,
    /// Squad players left out of the lineup, GKP first.
    pub bench: Vec<Player>,
    pub score: f64,
    /// Every evaluated formation, in evaluation order.
    pub candidates: Vec<FormationScore>,
}

/// Picks the best formation and lineup for a squad.
pub struct FormationSelector {
    solver: Arc<dyn Solver>,
    tie_break: TieBreak,
    metric: PointsMetric,
}

impl FormationSelector {
    #[must_use]
    pub fn new(solver: Arc<dyn Solver>) -> Self {
        Self {
            solver,
            tie_break: TieBreak::default(),
            metric: PointsMetric::Cumulative,
        }
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn with_metric(mut self, metric: PointsMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Choose the best of `formations` for `squad`.
    ///
    /// # Errors
    ///
    /// [`OptimiseError::DataMismatch`] when squad players are missing from
    /// `pool` or no formation can be fielded. Solver timeouts and failures
    /// are returned as they occur.
    pub fn select(
        &self,
        squad: &Squad,
        pool: &PlayerPool,
        formations: &[Formation],
    ) -> Result<FormationChoice> {
        let squad_pool = pool.restrict(squad.ids());
        if squad_pool.len() < SQUAD_SIZE {
            let missing: Vec<String> = squad
                .ids()
                .iter()
                .filter(|id| !squad_pool.contains(**id))
                .map(ToString::to_string)
                .collect();
            return Err(OptimiseError::DataMismatch {
                reason: format!(
                    "squad players missing from prediction pool: {}",
                    missing.join(", ")
                ),
            }
            .into());
        }

        let candidates = squad_pool.players();
        let mut scores = Vec::with_capacity(formations.len());
        let mut best: Option<(Formation, Vec<Player>, f64)> = None;

        for &formation in formations {
            let outcome = SelectionProblem::maximise(candidates, self.metric)
                .with_formation(formation)
                .solve(self.solver.as_ref(), Stage::Formation);

            let selection = match outcome {
                Ok(selection) => selection,
                Err(Error::Optimise(OptimiseError::Infeasible { .. })) => {
                    debug!(formation = %formation, "Formation cannot be fielded");
                    scores.push(FormationScore {
                        formation,
                        score: None,
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            debug!(formation = %formation, score = selection.score, "Formation solved");
            scores.push(FormationScore {
                formation,
                score: Some(selection.score),
            });

            let leads = best
                .as_ref()
                .map_or(true, |(_, _, top)| self.tie_break.replaces(selection.score, *top));
            if leads {
                best = Some((formation, selection.players, selection.score));
            }
        }

        let Some((formation, starters, score)) = best else {
            return Err(OptimiseError::DataMismatch {
                reason: "squad cannot field any legal formation".into(),
            }
            .into());
        };

        let lineup = Lineup::new(formation, starters);
        let mut bench: Vec<Player> = candidates
            .iter()
            .filter(|p| !lineup.contains(p.id))
            .cloned()
            .collect();
        sort_for_display(&mut bench);

        Ok(FormationChoice {
            formation,
            lineup,
            bench,
            score,
            candidates: scores,
        })
    }
}
