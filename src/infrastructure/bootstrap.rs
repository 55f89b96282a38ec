//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::solver::HiGHSSolver;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::solver::Solver;

/// Build the ILP solver with the configured wall-clock limit.
pub fn build_solver(config: &Config) -> Arc<dyn Solver> {
    let limit = config.optimiser.solver_time_limit();
    let solver = HiGHSSolver::with_time_limit(limit);
    debug!(solver = solver.name(), limit = ?limit, "Solver initialized");
    Arc::new(solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_build_solver_applies_time_limit() {
        let mut config = Config::default();
        config.optimiser.solver_time_limit_secs = 5;
        let solver = build_solver(&config);
        assert_eq!(solver.name(), "highs");
        assert_eq!(solver.time_limit(), Some(Duration::from_secs(5)));
    }
}
