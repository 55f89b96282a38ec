//! Solver adapters.

mod highs;

pub use highs::HiGHSSolver;
