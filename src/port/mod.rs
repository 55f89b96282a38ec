//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌─────────┐                                           ┌───────────┐
//! │ Solver  │                                           │  Squad    │
//! │ Adapter │                                           │  Adapter  │
//! └─────────┘                                           └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`Solver`] - ILP optimisation backend
//! - [`SquadSource`] - Manager roster and bank balance

pub mod outbound;

pub use outbound::solver::{IlpProblem, LpProblem, LpSolution, SolutionStatus, Solver};
pub use outbound::squad::{SquadSnapshot, SquadSource};
