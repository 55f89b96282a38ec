//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use fplopt::domain::error::DomainError;
//! use fplopt::domain::{PlayerId, Squad};
//!
//! // A squad must hold exactly 15 players
//! let result = Squad::try_new((1..=11).map(PlayerId::new).collect());
//!
//! assert!(matches!(result, Err(DomainError::SquadSize { actual: 11 })));
//! ```

use thiserror::Error;

use super::id::PlayerId;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A squad must contain exactly 15 distinct players.
    #[error("squad must contain exactly 15 players, got {actual}")]
    SquadSize {
        /// Number of distinct players supplied.
        actual: usize,
    },

    /// A player id appeared more than once where ids must be unique.
    #[error("player {id} appears more than once")]
    DuplicatePlayer {
        /// The repeated id.
        id: PlayerId,
    },

    /// Predicted points must be finite numbers.
    #[error("player {id} has non-finite predicted points")]
    NonFinitePoints {
        /// The offending player.
        id: PlayerId,
    },

    /// Player costs cannot be negative.
    #[error("player {id} has negative cost {cost}")]
    NegativeCost {
        /// The offending player.
        id: PlayerId,
        /// The cost that was provided.
        cost: rust_decimal::Decimal,
    },

    /// Formation counts must sum to 11 with exactly one goalkeeper.
    #[error("formation {gkp}-{def}-{mid}-{fwd} must have one goalkeeper and 11 players")]
    InvalidFormation {
        /// Goalkeepers.
        gkp: u8,
        /// Defenders.
        def: u8,
        /// Midfielders.
        mid: u8,
        /// Forwards.
        fwd: u8,
    },

    /// A formation label could not be parsed.
    #[error("cannot parse formation label '{label}'")]
    FormationLabel {
        /// The raw label.
        label: String,
    },

    /// A position label could not be parsed.
    #[error("unknown position '{label}'")]
    UnknownPosition {
        /// The raw label.
        label: String,
    },

    /// At most 11 transfers can be made into an 11-player lineup.
    #[error("transfers must be between 0 and 11, got {requested}")]
    TransferCount {
        /// The requested number of transfers.
        requested: u8,
    },

    /// The per-club cap must allow at least one player.
    #[error("club cap must be at least 1")]
    ZeroClubCap,

    /// The round-ahead index counts from 1 (the next fixture).
    #[error("round ahead must be at least 1")]
    ZeroRoundAhead,
}
