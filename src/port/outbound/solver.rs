//! Solver port for integer programming.
//!
//! Defines the trait for the optimisation backend used to pick lineups. Any
//! mixed-integer solver can sit behind it; the selection code is only
//! responsible for building problems and reading solutions.
//!
//! # Overview
//!
//! - [`Solver`]: Core ILP solver interface
//! - [`LpProblem`] / [`IlpProblem`]: Problem definitions
//! - [`LpSolution`]: Solution representation

use std::time::Duration;

use rust_decimal::Decimal;

use crate::domain::constraint::{Constraint, VariableBounds};
use crate::error::Result;

/// Integer linear programming solver.
///
/// Implementations wrap specific solver backends (HiGHS, CBC, etc.) and
/// provide a unified interface for optimisation problems.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`). Each call is
/// independent; no state carries over between solves.
pub trait Solver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Wall-clock limit applied to each solve, if any.
    fn time_limit(&self) -> Option<Duration> {
        None
    }

    /// Solve an integer linear programming problem.
    ///
    /// Minimizes the objective function with integer constraints on specified
    /// variables. Infeasible, unbounded and timed-out problems are reported
    /// through [`LpSolution::status`], not as errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend could not be run at all.
    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution>;
}

/// Linear programming problem definition.
///
/// Represents a minimization problem of the form:
///
/// ```text
/// minimize    c^T * x
/// subject to  constraints
///             bounds on x
/// ```
#[derive(Debug, Clone)]
pub struct LpProblem {
    /// Objective function coefficients.
    ///
    /// The solver minimizes `c^T * x` where `c` is this vector.
    pub objective: Vec<Decimal>,

    /// Linear constraints on the variables.
    pub constraints: Vec<Constraint>,

    /// Lower and upper bounds for each variable.
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    /// Create a new LP problem with the specified number of variables.
    ///
    /// Initializes all objective coefficients to zero and all variable bounds
    /// to their defaults.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            objective: vec![Decimal::ZERO; num_vars],
            constraints: Vec::new(),
            bounds: vec![VariableBounds::default(); num_vars],
        }
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

/// Integer linear programming problem definition.
#[derive(Debug, Clone)]
pub struct IlpProblem {
    /// Underlying linear programming problem.
    pub lp: LpProblem,

    /// Indices of variables constrained to integer values.
    pub integer_vars: Vec<usize>,
}

impl IlpProblem {
    /// Create an ILP with all variables constrained to binary (0 or 1) values.
    #[must_use]
    pub fn all_binary(mut lp: LpProblem) -> Self {
        lp.bounds = vec![VariableBounds::binary(); lp.num_vars()];
        let integer_vars: Vec<usize> = (0..lp.num_vars()).collect();
        Self { lp, integer_vars }
    }
}

/// Solution to an integer programming problem.
#[derive(Debug, Clone)]
pub struct LpSolution {
    /// Optimal values for each decision variable.
    pub values: Vec<Decimal>,

    /// Optimal objective function value.
    pub objective: Decimal,

    /// Termination status of the solver.
    pub status: SolutionStatus,
}

impl LpSolution {
    /// A solution carrying only a non-optimal status.
    #[must_use]
    pub fn without_values(num_vars: usize, status: SolutionStatus) -> Self {
        Self {
            values: vec![Decimal::ZERO; num_vars],
            objective: Decimal::ZERO,
            status,
        }
    }

    /// Return `true` if the solver found an optimal solution.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// Indices of binary variables set to one.
    ///
    /// Values are rounded at one half to absorb solver tolerances.
    #[must_use]
    pub fn selected(&self) -> Vec<usize> {
        let half = Decimal::new(5, 1);
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > half)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Termination status of an optimization solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Solver found a globally optimal solution.
    Optimal,

    /// No feasible solution exists.
    Infeasible,

    /// Objective function is unbounded.
    Unbounded,

    /// Solver ran out of wall-clock time.
    TimeLimit,

    /// Solver encountered an internal error.
    Error,
}
