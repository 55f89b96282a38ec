//! Lineups, budgets and the transfer diff between two lineups.

use std::collections::BTreeSet;

use serde::Serialize;

use super::formation::Formation;
use super::id::PlayerId;
use super::money::Cost;
use super::player::{Player, PointsMetric, Position};

/// Eleven starters chosen under a formation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lineup {
    pub formation: Formation,
    players: Vec<Player>,
}

impl Lineup {
    /// Create a lineup; players are kept in position-then-id order.
    #[must_use]
    pub fn new(formation: Formation, mut players: Vec<Player>) -> Self {
        sort_for_display(&mut players);
        Self { formation, players }
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> BTreeSet<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// Sum of the starters' current costs.
    #[must_use]
    pub fn cost(&self) -> Cost {
        self.players.iter().map(|p| p.cost).sum()
    }

    /// Sum of the starters' predicted points under `metric`.
    #[must_use]
    pub fn score(&self, metric: PointsMetric) -> f64 {
        self.players.iter().map(|p| p.points_for(metric)).sum()
    }

    #[must_use]
    pub fn position_count(&self, position: Position) -> usize {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .count()
    }

    /// Whether the starters match the formation's per-position counts.
    #[must_use]
    pub fn matches_formation(&self) -> bool {
        Position::ALL
            .iter()
            .all(|&pos| self.position_count(pos) == usize::from(self.formation.count(pos)))
    }
}

/// Money available to the transfer pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Budget {
    /// Current value of the 11 starters.
    pub lineup_value: Cost,
    /// Money not spent on the squad.
    pub bank: Cost,
    /// Ceiling on the new lineup's cost.
    pub total: Cost,
}

impl Budget {
    /// Budget from the starters' value plus the bank balance.
    #[must_use]
    pub fn from_lineup(lineup: &Lineup, bank: Cost) -> Self {
        let lineup_value = lineup.cost();
        Self {
            lineup_value,
            bank,
            total: lineup_value + bank,
        }
    }

    /// A bare ceiling, for callers that do not start from a lineup.
    #[must_use]
    pub fn fixed(total: Cost) -> Self {
        Self {
            lineup_value: total,
            bank: Cost::ZERO,
            total,
        }
    }
}

/// Players leaving and joining the lineup.
///
/// Derived as two set differences, so both sides always have the same length
/// when the lineups have equal size.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransferPlan {
    pub players_out: Vec<Player>,
    pub players_in: Vec<Player>,
}

impl TransferPlan {
    /// `out = old \ new`, `in = new \ old`.
    #[must_use]
    pub fn between(old: &Lineup, new: &Lineup) -> Self {
        let old_ids = old.ids();
        let new_ids = new.ids();

        let mut players_out: Vec<Player> = old
            .players()
            .iter()
            .filter(|p| !new_ids.contains(&p.id))
            .cloned()
            .collect();
        let mut players_in: Vec<Player> = new
            .players()
            .iter()
            .filter(|p| !old_ids.contains(&p.id))
            .cloned()
            .collect();
        sort_for_display(&mut players_out);
        sort_for_display(&mut players_in);

        Self {
            players_out,
            players_in,
        }
    }

    /// Number of transfers (players brought in).
    #[must_use]
    pub fn len(&self) -> usize {
        self.players_in.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players_in.is_empty() && self.players_out.is_empty()
    }
}

/// Order players GKP, DEF, MID, FWD, then by id.
pub fn sort_for_display(players: &mut [Player]) {
    players.sort_by_key(|p| (p.position, p.id));
}
