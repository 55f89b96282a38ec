use std::time::Duration;

use fplopt::error::Result;
use fplopt::port::outbound::solver::{IlpProblem, LpSolution, SolutionStatus, Solver};

/// Solver that always reports the given status without solving.
pub struct StubSolver {
    pub status: SolutionStatus,
    pub limit: Option<Duration>,
}

impl Solver for StubSolver {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn time_limit(&self) -> Option<Duration> {
        self.limit
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        Ok(LpSolution::without_values(problem.lp.num_vars(), self.status))
    }
}
