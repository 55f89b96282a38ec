//! Outbound adapters (driven side).

pub mod file;
pub mod fpl;
pub mod solver;
