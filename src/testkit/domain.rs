//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`Player`], [`PlayerPool`],
//! [`Squad`] and [`Lineup`] so tests focus on assertions rather than
//! construction boilerplate.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;

use crate::domain::{Formation, Lineup, Player, PlayerId, PlayerPool, Position, Squad};

/// Create a player whose cumulative points equal its round points.
pub fn player(id: u32, position: Position, club: &str, cost: f64, points: f64) -> Player {
    Player {
        id: PlayerId::new(id),
        name: format!("Player {id}"),
        club: club.to_string(),
        position,
        cost: Decimal::try_from(cost).unwrap_or(Decimal::ZERO),
        points,
        points_cumulative: points,
    }
}

/// Player ids for every value in `range`.
pub fn squad_ids(range: RangeInclusive<u32>) -> Vec<PlayerId> {
    range.map(PlayerId::new).collect()
}

/// Fifteen players shaped like a real squad: 2 GKP, 5 DEF, 5 MID, 3 FWD.
///
/// Ids run from `offset + 1` to `offset + 15`, every player has their own
/// club and points are distinct enough that 3-5-2 is the only best
/// formation, scoring 65.5.
pub fn standard_squad_players(offset: u32) -> Vec<Player> {
    let shape: [(Position, f64, &[f64]); 4] = [
        (Position::Goalkeeper, 4.5, &[6.0, 3.0]),
        (Position::Defender, 5.0, &[5.0, 4.5, 4.0, 3.5, 3.0]),
        (Position::Midfielder, 7.0, &[8.0, 7.0, 6.0, 5.0, 4.0]),
        (Position::Forward, 8.0, &[9.0, 7.0, 2.0]),
    ];

    let mut players = Vec::with_capacity(15);
    let mut id = offset;
    for (position, cost, points) in shape {
        for &p in points {
            id += 1;
            players.push(player(id, position, &format!("Club {id}"), cost, p));
        }
    }
    players
}

/// Deterministic transfer market with `per_position` players per position.
///
/// Players are spread over five clubs so a club cap of 3 can bind; costs
/// run from 4.0 to 8.0 and points from 1.0 to 13.0.
pub fn market_players(offset: u32, per_position: u32) -> Vec<Player> {
    const CLUBS: [&str; 5] = ["Arsenal", "Chelsea", "Everton", "Fulham", "Spurs"];

    let mut players = Vec::new();
    let mut id = offset;
    for position in Position::ALL {
        for _ in 0..per_position {
            id += 1;
            let cost = 4.0 + f64::from((id * 7) % 9) * 0.5;
            let points = 1.0 + f64::from((id * 13) % 17) * 0.75;
            players.push(player(id, position, CLUBS[(id % 5) as usize], cost, points));
        }
    }
    players
}

/// Squad holding every player in `players`.
pub fn squad_of(players: &[Player]) -> Squad {
    Squad::try_new(players.iter().map(|p| p.id).collect()).expect("test squad must be valid")
}

/// Pool holding `players`.
pub fn pool_of(players: Vec<Player>) -> PlayerPool {
    PlayerPool::try_new(players).expect("test pool must be valid")
}

/// Lineup of the players with the given ids, taken from `players`.
pub fn lineup_of(formation: Formation, players: &[Player], ids: &[u32]) -> Lineup {
    let picked = players
        .iter()
        .filter(|p| ids.contains(&p.id.value()))
        .cloned()
        .collect();
    Lineup::new(formation, picked)
}
