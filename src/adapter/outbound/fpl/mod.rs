//! Remote fantasy API adapter.

mod client;
pub mod dto;

pub use client::FplClient;
