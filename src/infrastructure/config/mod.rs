//! Infrastructure configuration modules.

pub mod data;
pub mod fpl;
pub mod logging;
pub mod optimiser;
pub mod settings;
