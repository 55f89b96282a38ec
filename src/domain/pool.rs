//! Player pools and squads.
//!
//! A [`PlayerPool`] is the universe of players eligible for one target round.
//! A [`Squad`] is the manager's current 15 players, referenced by id only.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::error::DomainError;
use super::formation::SQUAD_SIZE;
use super::id::PlayerId;
use super::player::{Player, Position};

/// Ordered collection of players, unique by id, scoped to one target round.
#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    players: Vec<Player>,
    index: HashMap<PlayerId, usize>,
}

impl PlayerPool {
    /// Build a pool, validating uniqueness, finite points and non-negative costs.
    pub fn try_new(players: Vec<Player>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(players.len());
        for (i, player) in players.iter().enumerate() {
            if !player.points.is_finite() || !player.points_cumulative.is_finite() {
                return Err(DomainError::NonFinitePoints { id: player.id });
            }
            if player.cost.is_sign_negative() && !player.cost.is_zero() {
                return Err(DomainError::NegativeCost {
                    id: player.id,
                    cost: player.cost,
                });
            }
            if index.insert(player.id, i).is_some() {
                return Err(DomainError::DuplicatePlayer { id: player.id });
            }
        }
        Ok(Self { players, index })
    }

    /// Number of players in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.index.get(&id).map(|&i| &self.players[i])
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.index.contains_key(&id)
    }

    /// Players in pool order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Number of players at `position`.
    #[must_use]
    pub fn position_count(&self, position: Position) -> usize {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .count()
    }

    /// Sub-pool holding only the given ids, in pool order.
    ///
    /// Ids missing from the pool are ignored; callers compare lengths to
    /// detect them.
    #[must_use]
    pub fn restrict<'a, I>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = &'a PlayerId>,
    {
        let wanted: BTreeSet<PlayerId> = ids.into_iter().copied().collect();
        let players: Vec<Player> = self
            .players
            .iter()
            .filter(|p| wanted.contains(&p.id))
            .cloned()
            .collect();
        let index = players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect();
        Self { players, index }
    }
}

/// The manager's current roster: exactly 15 distinct player ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Squad {
    ids: BTreeSet<PlayerId>,
}

impl Squad {
    /// Create a squad, rejecting duplicates and wrong sizes.
    pub fn try_new(ids: Vec<PlayerId>) -> Result<Self, DomainError> {
        let mut set = BTreeSet::new();
        for id in ids {
            if !set.insert(id) {
                return Err(DomainError::DuplicatePlayer { id });
            }
        }
        if set.len() != SQUAD_SIZE {
            return Err(DomainError::SquadSize { actual: set.len() });
        }
        Ok(Self { ids: set })
    }

    /// Player ids, ascending.
    #[must_use]
    pub fn ids(&self) -> &BTreeSet<PlayerId> {
        &self.ids
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
