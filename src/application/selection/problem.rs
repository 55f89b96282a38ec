//! Binary selection problems over a list of candidate players.
//!
//! One 0/1 variable per candidate, objective "maximise predicted points".
//! Both optimisation passes start here and stack their constraints on top.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::trace;

use crate::domain::constraint::{Constraint, ConstraintSense};
use crate::domain::{Cost, Formation, Player, PlayerId, PointsMetric, Position, LINEUP_SIZE};
use crate::error::{OptimiseError, Result, Stage};
use crate::port::outbound::solver::{IlpProblem, LpProblem, SolutionStatus, Solver};

/// Slack allowed when re-checking a solved assignment against its rows.
const FEASIBILITY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 6);

/// A selection problem under construction.
#[derive(Debug, Clone)]
pub struct SelectionProblem<'a> {
    candidates: &'a [Player],
    metric: PointsMetric,
    lp: LpProblem,
}

/// Players picked by a solved selection problem.
#[derive(Debug, Clone)]
pub struct Selection {
    pub players: Vec<Player>,
    /// Predicted points of the picked players under the problem's metric.
    pub score: f64,
}

impl<'a> SelectionProblem<'a> {
    /// Maximise the sum of `metric` points over the picked candidates.
    #[must_use]
    pub fn maximise(candidates: &'a [Player], metric: PointsMetric) -> Self {
        let mut lp = LpProblem::new(candidates.len());
        // The solver minimises, so points enter negated.
        lp.objective = candidates
            .iter()
            .map(|p| -Decimal::try_from(p.points_for(metric)).unwrap_or(Decimal::ZERO))
            .collect();
        Self {
            candidates,
            metric,
            lp,
        }
    }

    fn membership(&self, pred: impl Fn(&Player) -> bool) -> Vec<bool> {
        self.candidates.iter().map(pred).collect()
    }

    fn push(&mut self, constraint: Constraint) {
        self.lp.constraints.push(constraint);
    }

    /// Exactly `formation[pos]` picks per position and 11 picks overall.
    #[must_use]
    pub fn with_formation(mut self, formation: Formation) -> Self {
        for position in Position::ALL {
            let member = self.membership(|p| p.position == position);
            let row = Constraint::count(
                &member,
                ConstraintSense::Equal,
                u32::from(formation.count(position)),
            );
            self.push(row);
        }
        let everyone = vec![true; self.candidates.len()];
        self.push(Constraint::count(
            &everyone,
            ConstraintSense::Equal,
            u32::from(LINEUP_SIZE),
        ));
        self
    }

    /// Total cost of the picks stays within `ceiling`.
    #[must_use]
    pub fn with_budget(mut self, ceiling: Cost) -> Self {
        let costs = self.candidates.iter().map(|p| p.cost).collect();
        self.push(Constraint::weighted(costs, ConstraintSense::LessEqual, ceiling));
        self
    }

    /// At most `cap` picks share a club, for every club among the candidates.
    #[must_use]
    pub fn with_club_cap(mut self, cap: u8) -> Self {
        let clubs: BTreeSet<&str> = self.candidates.iter().map(|p| p.club.as_str()).collect();
        for club in clubs {
            let member = self.membership(|p| p.club == club);
            self.push(Constraint::count(
                &member,
                ConstraintSense::LessEqual,
                u32::from(cap),
            ));
        }
        self
    }

    /// Exactly `count` picks come from `incumbents`.
    #[must_use]
    pub fn with_retained(mut self, incumbents: &BTreeSet<PlayerId>, count: u8) -> Self {
        let member = self.membership(|p| incumbents.contains(&p.id));
        self.push(Constraint::count(
            &member,
            ConstraintSense::Equal,
            u32::from(count),
        ));
        self
    }

    #[must_use]
    pub fn num_constraints(&self) -> usize {
        self.lp.constraints.len()
    }

    /// Solve with `solver` and read back the picked players.
    ///
    /// # Errors
    ///
    /// Maps every non-optimal outcome to the matching [`OptimiseError`]
    /// tagged with `stage`.
    pub fn solve(self, solver: &dyn Solver, stage: Stage) -> Result<Selection> {
        let problem = IlpProblem::all_binary(self.lp);
        trace!(
            %stage,
            solver = solver.name(),
            vars = problem.lp.num_vars(),
            rows = problem.lp.constraints.len(),
            "Solving selection problem"
        );
        let solution = solver.solve_ilp(&problem)?;

        match solution.status {
            SolutionStatus::Optimal => {}
            SolutionStatus::Infeasible => return Err(OptimiseError::Infeasible { stage }.into()),
            SolutionStatus::Unbounded => return Err(OptimiseError::Unbounded { stage }.into()),
            SolutionStatus::TimeLimit => {
                return Err(OptimiseError::SolverTimeout {
                    stage,
                    limit: solver.time_limit().unwrap_or_default(),
                }
                .into())
            }
            SolutionStatus::Error => {
                return Err(OptimiseError::SolverFailure {
                    stage,
                    reason: format!("{} reported an internal error", solver.name()),
                }
                .into())
            }
        }

        let rounded: Vec<Decimal> = solution
            .values
            .iter()
            .map(|v| v.round())
            .collect();
        if let Some(row) = problem
            .lp
            .constraints
            .iter()
            .position(|c| !c.is_satisfied(&rounded, FEASIBILITY_TOLERANCE))
        {
            return Err(OptimiseError::SolverFailure {
                stage,
                reason: format!("solution violates constraint row {row}"),
            }
            .into());
        }

        let players: Vec<Player> = solution
            .selected()
            .into_iter()
            .filter_map(|i| self.candidates.get(i).cloned())
            .collect();
        let score = players.iter().map(|p| p.points_for(self.metric)).sum();

        Ok(Selection { players, score })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::solver::HiGHSSolver;
    use crate::domain::LEGAL_FORMATIONS;
    use crate::testkit::domain::{player, standard_squad_players};

    #[test]
    fn test_formation_rows_cover_each_position_and_total() {
        let players = standard_squad_players(0);
        let problem = SelectionProblem::maximise(&players, PointsMetric::Cumulative)
            .with_formation(LEGAL_FORMATIONS[0]);
        assert_eq!(problem.num_constraints(), 5);
    }

    #[test]
    fn test_club_cap_adds_one_row_per_club() {
        let players = vec![
            player(1, Position::Goalkeeper, "A", 4.0, 1.0),
            player(2, Position::Defender, "B", 4.0, 1.0),
            player(3, Position::Defender, "A", 4.0, 1.0),
        ];
        let problem = SelectionProblem::maximise(&players, PointsMetric::Round).with_club_cap(3);
        assert_eq!(problem.num_constraints(), 2);
    }

    #[test]
    fn test_objective_is_negated_points() {
        let players = vec![player(1, Position::Forward, "A", 7.0, 6.5)];
        let problem = SelectionProblem::maximise(&players, PointsMetric::Cumulative);
        assert_eq!(problem.lp.objective, vec![Decimal::new(-65, 1)]);
    }

    #[test]
    fn test_solve_returns_top_scorers_for_formation() {
        let players = standard_squad_players(0);
        let selection = SelectionProblem::maximise(&players, PointsMetric::Cumulative)
            .with_formation(LEGAL_FORMATIONS[0])
            .solve(&HiGHSSolver::new(), Stage::Formation)
            .unwrap();

        assert_eq!(selection.players.len(), 11);
        let expected: f64 = selection.players.iter().map(|p| p.points_cumulative).sum();
        assert!((selection.score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_solve_maps_infeasible_to_error() {
        // No goalkeepers, so no formation can be met.
        let players: Vec<Player> = (1..=15)
            .map(|i| player(i, Position::Midfielder, "A", 5.0, 1.0))
            .collect();
        let err = SelectionProblem::maximise(&players, PointsMetric::Cumulative)
            .with_formation(LEGAL_FORMATIONS[0])
            .solve(&HiGHSSolver::new(), Stage::Formation)
            .unwrap_err();

        assert!(matches!(
            err,
            crate::error::Error::Optimise(OptimiseError::Infeasible {
                stage: Stage::Formation
            })
        ));
    }
}
