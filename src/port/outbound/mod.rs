//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: the optimisation
//! backend and the source of the manager's squad.

pub mod solver;
pub mod squad;
