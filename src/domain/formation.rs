//! Starting-XI formations.
//!
//! A formation is the number of starters per position. Every legal formation
//! fields exactly one goalkeeper and 11 players in total; the outfield split is
//! drawn from [`LEGAL_FORMATIONS`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::player::Position;

/// Players in a starting lineup.
pub const LINEUP_SIZE: u8 = 11;

/// Players in a full squad (lineup plus bench).
pub const SQUAD_SIZE: usize = 15;

/// Most starters one club may supply unless configured otherwise.
pub const DEFAULT_CLUB_CAP: u8 = 3;

/// Count of starters per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Formation {
    gkp: u8,
    def: u8,
    mid: u8,
    fwd: u8,
}

/// Which formation wins when several reach the same score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// The earliest formation in evaluation order keeps the lead.
    #[default]
    First,
    /// A later formation with an equal score takes the lead.
    Last,
}

impl TieBreak {
    /// Whether `candidate`, evaluated after `best`, takes the lead.
    #[must_use]
    pub fn replaces(self, candidate: f64, best: f64) -> bool {
        match self {
            Self::First => candidate > best,
            Self::Last => candidate >= best,
        }
    }
}

/// The legal formations, in the order they are evaluated.
pub const LEGAL_FORMATIONS: [Formation; 8] = [
    Formation::outfield(4, 4, 2),
    Formation::outfield(4, 3, 3),
    Formation::outfield(4, 5, 1),
    Formation::outfield(3, 5, 2),
    Formation::outfield(3, 4, 3),
    Formation::outfield(5, 4, 1),
    Formation::outfield(5, 3, 2),
    Formation::outfield(5, 2, 3),
];

impl Formation {
    const fn outfield(def: u8, mid: u8, fwd: u8) -> Self {
        Self {
            gkp: 1,
            def,
            mid,
            fwd,
        }
    }

    /// Create a formation, checking the goalkeeper and total-size rules.
    pub fn try_new(gkp: u8, def: u8, mid: u8, fwd: u8) -> Result<Self, DomainError> {
        let total = u16::from(gkp) + u16::from(def) + u16::from(mid) + u16::from(fwd);
        if gkp != 1 || total != u16::from(LINEUP_SIZE) {
            return Err(DomainError::InvalidFormation { gkp, def, mid, fwd });
        }
        Ok(Self { gkp, def, mid, fwd })
    }

    /// Number of starters required at `position`.
    #[must_use]
    pub const fn count(&self, position: Position) -> u8 {
        match position {
            Position::Goalkeeper => self.gkp,
            Position::Defender => self.def,
            Position::Midfielder => self.mid,
            Position::Forward => self.fwd,
        }
    }

    /// Whether this formation is one of [`LEGAL_FORMATIONS`].
    #[must_use]
    pub fn is_legal(&self) -> bool {
        LEGAL_FORMATIONS.contains(self)
    }

    /// Outfield label with the goalkeeper implicit, e.g. `4-4-2`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}-{}", self.def, self.mid, self.fwd)
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Formation {
    type Err = DomainError;

    /// Accepts `4-4-2` or the explicit-goalkeeper form `1-4-4-2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label_error = || DomainError::FormationLabel {
            label: s.to_string(),
        };
        let parts = s
            .trim()
            .split('-')
            .map(|part| part.trim().parse::<u8>().map_err(|_| label_error()))
            .collect::<Result<Vec<_>, _>>()?;

        match parts.as_slice() {
            [def, mid, fwd] => Self::try_new(1, *def, *mid, *fwd),
            [gkp, def, mid, fwd] => Self::try_new(*gkp, *def, *mid, *fwd),
            _ => Err(label_error()),
        }
    }
}

impl From<Formation> for String {
    fn from(formation: Formation) -> Self {
        formation.label()
    }
}

impl TryFrom<String> for Formation {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
