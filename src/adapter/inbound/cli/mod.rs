//! CLI module graph.

pub mod command;
pub mod config;
pub mod formations;
pub mod output;
pub mod recommend;
pub mod report;
