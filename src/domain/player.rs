//! Players and their positions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::PlayerId;
use super::money::Cost;

/// Playing position, ordered the way lineups are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GKP")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    /// All positions in lineup order.
    pub const ALL: [Self; 4] = [
        Self::Goalkeeper,
        Self::Defender,
        Self::Midfielder,
        Self::Forward,
    ];

    /// Short upstream label (`GKP`, `DEF`, `MID`, `FWD`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Goalkeeper => "GKP",
            Self::Defender => "DEF",
            Self::Midfielder => "MID",
            Self::Forward => "FWD",
        }
    }

    /// Map the upstream numeric `element_type` (1-4) to a position.
    #[must_use]
    pub const fn from_element_type(element_type: u8) -> Option<Self> {
        match element_type {
            1 => Some(Self::Goalkeeper),
            2 => Some(Self::Defender),
            3 => Some(Self::Midfielder),
            4 => Some(Self::Forward),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GKP" | "GK" => Ok(Self::Goalkeeper),
            "DEF" => Ok(Self::Defender),
            "MID" => Ok(Self::Midfielder),
            "FWD" => Ok(Self::Forward),
            _ => Err(DomainError::UnknownPosition {
                label: s.to_string(),
            }),
        }
    }
}

/// A player eligible for selection in one target round.
///
/// Immutable for the duration of an optimisation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Club the player is registered with.
    pub club: String,
    pub position: Position,
    /// Current market cost.
    pub cost: Cost,
    /// Predicted points for the target round.
    pub points: f64,
    /// Predicted points summed over all rounds up to and including the target round.
    pub points_cumulative: f64,
}

impl Player {
    /// Predicted points under the given metric.
    #[must_use]
    pub fn points_for(&self, metric: PointsMetric) -> f64 {
        match metric {
            PointsMetric::Round => self.points,
            PointsMetric::Cumulative => self.points_cumulative,
        }
    }
}

/// Which prediction an optimisation maximises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointsMetric {
    /// Points for the target round only.
    Round,
    /// Points accumulated up to and including the target round.
    #[default]
    Cumulative,
}
