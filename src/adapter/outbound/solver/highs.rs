//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming solver.
//! This implementation wraps it using the good_lp crate for ergonomic Rust usage.

use std::time::Duration;

use good_lp::solvers::highs::highs;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel,
    WithTimeLimit,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::constraint::ConstraintSense;
use crate::error::Result;
use crate::port::outbound::solver::{IlpProblem, LpProblem, LpSolution, SolutionStatus, Solver};

/// HiGHS-based ILP solver.
///
/// Each call builds a fresh model; nothing is shared between solves. A time
/// limit is handed to HiGHS, which stops on its own once it passes.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver {
    time_limit: Option<Duration>,
}

impl HiGHSSolver {
    /// Create a new HiGHS solver instance without a time limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver that gives up after `limit` of wall-clock time.
    #[must_use]
    pub fn with_time_limit(limit: Duration) -> Self {
        Self {
            time_limit: Some(limit),
        }
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        Ok(solve_with_good_lp(
            &problem.lp,
            &problem.integer_vars,
            self.time_limit,
        ))
    }
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(
    problem: &LpProblem,
    integer_vars: &[usize],
    time_limit: Option<Duration>,
) -> LpSolution {
    let n = problem.num_vars();

    // Handle empty problem
    if n == 0 {
        return LpSolution {
            values: vec![],
            objective: Decimal::ZERO,
            status: SolutionStatus::Optimal,
        };
    }

    // Create variables
    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for (i, bounds) in problem.bounds.iter().enumerate() {
        let mut v = variable();

        if let Some(lb) = bounds.lower {
            v = v.min(lb.to_f64().unwrap_or(0.0));
        }
        if let Some(ub) = bounds.upper {
            v = v.max(ub.to_f64().unwrap_or(f64::INFINITY));
        }

        if integer_vars.contains(&i) {
            v = v.integer();
        }

        var_list.push(vars.add(v));
    }

    let objective: Expression = var_list
        .iter()
        .zip(problem.objective.iter())
        .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
        .sum();

    let mut model = vars.minimise(&objective).using(highs);
    if let Some(limit) = time_limit {
        model = model.with_time_limit(limit.as_secs_f64());
    }

    for constr in &problem.constraints {
        let lhs: Expression = var_list
            .iter()
            .zip(constr.coefficients.iter())
            .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
            .sum();

        let rhs = constr.rhs.to_f64().unwrap_or(0.0);

        match constr.sense {
            ConstraintSense::GreaterEqual => {
                model = model.with(constraint!(lhs >= rhs));
            }
            ConstraintSense::LessEqual => {
                model = model.with(constraint!(lhs <= rhs));
            }
            ConstraintSense::Equal => {
                model = model.with(constraint!(lhs == rhs));
            }
        }
    }

    match model.solve() {
        Ok(solution) if matches!(solution.status(), good_lp::SolutionStatus::TimeLimit) => {
            warn!(limit = ?time_limit, vars = n, "HiGHS stopped at its time limit");
            LpSolution::without_values(n, SolutionStatus::TimeLimit)
        }
        Ok(solution) => {
            let values: Vec<Decimal> = var_list
                .iter()
                .map(|v| Decimal::try_from(solution.value(*v)).unwrap_or(Decimal::ZERO))
                .collect();

            // Re-evaluate objective with the solved values
            let obj_value: f64 = values
                .iter()
                .zip(problem.objective.iter())
                .map(|(v, c)| v.to_f64().unwrap_or(0.0) * c.to_f64().unwrap_or(0.0))
                .sum();

            LpSolution {
                values,
                objective: Decimal::try_from(obj_value).unwrap_or(Decimal::ZERO),
                status: SolutionStatus::Optimal,
            }
        }
        Err(err) => {
            let status = match err {
                ResolutionError::Infeasible => SolutionStatus::Infeasible,
                ResolutionError::Unbounded => SolutionStatus::Unbounded,
                // A limited run that ends before any incumbent is found.
                ResolutionError::Other("NoSolutionFound") if time_limit.is_some() => {
                    warn!(limit = ?time_limit, vars = n, "HiGHS found no solution in time");
                    SolutionStatus::TimeLimit
                }
                // HiGHS can stop at "unbounded or infeasible"; with bounded
                // variables only the second is possible.
                other if other.to_string().contains("nfeasible") => SolutionStatus::Infeasible,
                other => {
                    warn!(error = %other, "HiGHS solve failed");
                    SolutionStatus::Error
                }
            };
            LpSolution::without_values(n, status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constraint::Constraint;
    use rust_decimal_macros::dec;

    #[test]
    fn test_solver_name() {
        let solver = HiGHSSolver::new();
        assert_eq!(solver.name(), "highs");
        assert_eq!(solver.time_limit(), None);
    }

    #[test]
    fn test_binary_ilp() {
        // Minimize: -x - y (maximize x + y)
        // Subject to: x + y <= 1
        //            x, y in {0, 1}
        let solver = HiGHSSolver::new();

        let mut lp = LpProblem::new(2);
        lp.objective = vec![-Decimal::ONE, -Decimal::ONE];
        lp.constraints = vec![Constraint::leq(
            vec![Decimal::ONE, Decimal::ONE],
            Decimal::ONE,
        )];

        let ilp = IlpProblem::all_binary(lp);
        let solution = solver.solve_ilp(&ilp).unwrap();

        assert!(solution.is_optimal());
        let sum: Decimal = solution.values.iter().sum();
        assert!(
            (sum - Decimal::ONE).abs() < dec!(0.01),
            "Sum should be 1, got {}",
            sum
        );
        assert_eq!(solution.selected().len(), 1);
    }

    #[test]
    fn test_knapsack_picks_best_pair() {
        // Maximize 5a + 4b + 3c subject to 2a + 3b + c <= 3, binary.
        let solver = HiGHSSolver::new();

        let mut lp = LpProblem::new(3);
        lp.objective = vec![dec!(-5), dec!(-4), dec!(-3)];
        lp.constraints = vec![Constraint::leq(vec![dec!(2), dec!(3), dec!(1)], dec!(3))];

        let solution = solver.solve_ilp(&IlpProblem::all_binary(lp)).unwrap();

        assert!(solution.is_optimal());
        assert_eq!(solution.selected(), vec![0, 2]);
        assert!((solution.objective - dec!(-8)).abs() < dec!(0.01));
    }

    #[test]
    fn test_infeasible_problem_reports_status() {
        // x + y = 3 with binary x, y has no solution.
        let solver = HiGHSSolver::new();

        let mut lp = LpProblem::new(2);
        lp.constraints = vec![Constraint::eq(vec![Decimal::ONE, Decimal::ONE], dec!(3))];

        let solution = solver.solve_ilp(&IlpProblem::all_binary(lp)).unwrap();

        assert_eq!(solution.status, SolutionStatus::Infeasible);
        assert!(solution.selected().is_empty());
    }

    #[test]
    fn test_time_limited_solver_returns_small_solves() {
        let solver = HiGHSSolver::with_time_limit(Duration::from_secs(30));

        let mut lp = LpProblem::new(2);
        lp.objective = vec![dec!(-1), dec!(-2)];
        lp.constraints = vec![Constraint::leq(vec![dec!(1), dec!(1)], dec!(1))];

        let solution = solver.solve_ilp(&IlpProblem::all_binary(lp)).unwrap();

        assert!(solution.is_optimal());
        assert_eq!(solution.selected(), vec![1]);
    }

    #[test]
    fn test_zero_time_limit_reports_time_limit() {
        // Two-row knapsack over 60 binaries; HiGHS cannot prove optimality in no time.
        let n = 60;
        let weights: Vec<Decimal> = (0..n).map(|i| Decimal::from(7 + (i * 13) % 29)).collect();
        let volumes: Vec<Decimal> = (0..n).map(|i| Decimal::from(5 + (i * 17) % 23)).collect();

        let mut lp = LpProblem::new(n);
        lp.objective = (0..n).map(|i| -Decimal::from(11 + (i * 31) % 37)).collect();
        lp.constraints = vec![
            Constraint::leq(weights, dec!(300)),
            Constraint::leq(volumes, dec!(250)),
        ];

        let solver = HiGHSSolver::with_time_limit(Duration::ZERO);
        let solution = solver.solve_ilp(&IlpProblem::all_binary(lp)).unwrap();

        assert_eq!(solution.status, SolutionStatus::TimeLimit);
        assert!(!solution.is_optimal());
        assert!(solution.selected().is_empty());
    }

    #[test]
    fn test_empty_problem() {
        let solver = HiGHSSolver::new();
        let problem = IlpProblem::all_binary(LpProblem::new(0));
        let solution = solver.solve_ilp(&problem).unwrap();

        assert!(solution.is_optimal());
        assert!(solution.values.is_empty());
    }
}
