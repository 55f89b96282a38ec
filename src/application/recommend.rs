//! Recommendation use case.
//!
//! Runs the two passes in order: the formation pass picks the starting XI
//! from the current squad, the budget is derived from that lineup plus the
//! bank, and the transfer pass searches the full pool in the same formation.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::application::selection::{
    FormationChoice, FormationSelector, TransferLimits, TransferOutcome, TransferPlanner,
};
use crate::domain::error::DomainError;
use crate::domain::{
    Budget, Cost, PlayerPool, PointsMetric, PredictionSet, Squad, TieBreak, LEGAL_FORMATIONS,
};
use crate::error::{Error, Result};
use crate::port::outbound::solver::Solver;
use crate::port::outbound::squad::SquadSource;

/// Scalar parameters of one recommendation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendParams {
    /// Which upcoming fixture to optimise for, counting from 1.
    pub round_ahead: u32,
    pub limits: TransferLimits,
    pub tie_break: TieBreak,
    /// Points maximised by the transfer pass.
    pub transfer_objective: PointsMetric,
}

impl RecommendParams {
    /// Parameters with default tie-break and objective.
    pub fn try_new(
        round_ahead: u32,
        n_transfers: u8,
        club_cap: u8,
    ) -> std::result::Result<Self, DomainError> {
        if round_ahead == 0 {
            return Err(DomainError::ZeroRoundAhead);
        }
        Ok(Self {
            round_ahead,
            limits: TransferLimits::try_new(n_transfers, club_cap)?,
            tie_break: TieBreak::default(),
            transfer_objective: PointsMetric::default(),
        })
    }
}

/// Everything a report needs from one run.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub current: FormationChoice,
    pub budget: Budget,
    pub n_transfers: u8,
    pub transfers: TransferOutcome,
}

impl Recommendation {
    /// Predicted points gained by making the transfers.
    #[must_use]
    pub fn gain(&self) -> f64 {
        self.transfers.score - self.current.score
    }
}

/// Run both passes against an already aligned pool.
///
/// # Errors
///
/// Any optimisation error from either pass. There is no partial result: a
/// failed transfer pass fails the whole run.
pub fn recommend(
    solver: Arc<dyn Solver>,
    squad: &Squad,
    bank: Cost,
    pool: &PlayerPool,
    params: &RecommendParams,
) -> Result<Recommendation> {
    let current = FormationSelector::new(Arc::clone(&solver))
        .with_tie_break(params.tie_break)
        .select(squad, pool, &LEGAL_FORMATIONS)?;
    info!(
        formation = %current.formation,
        score = current.score,
        "Best formation for current squad"
    );

    let budget = Budget::from_lineup(&current.lineup, bank);
    info!(
        lineup_value = %budget.lineup_value,
        bank = %budget.bank,
        total = %budget.total,
        "Transfer budget"
    );

    let transfers = TransferPlanner::new(solver)
        .with_metric(params.transfer_objective)
        .plan(&current.lineup, pool, budget, params.limits)?;
    info!(
        transfers = transfers.plan.len(),
        allowed = params.limits.n_transfers(),
        score = transfers.score,
        "Transfer plan ready"
    );

    Ok(Recommendation {
        current,
        budget,
        n_transfers: params.limits.n_transfers(),
        transfers,
    })
}

/// Fetch the squad for the round before the predictions and run both passes.
///
/// # Errors
///
/// [`DomainError`] when the predictions are empty or cannot be aligned,
/// any error from `source`, and any optimisation error.
pub async fn recommend_for_team(
    solver: Arc<dyn Solver>,
    source: &dyn SquadSource,
    team_id: u64,
    predictions: &PredictionSet,
    params: &RecommendParams,
) -> Result<Recommendation> {
    let pool = predictions.pool_for(params.round_ahead)?;
    let previous_round = predictions.previous_round().ok_or_else(|| {
        Error::Parse("predictions contain no rounds after round 0".into())
    })?;

    info!(
        team_id,
        previous_round,
        source = source.name(),
        pool = pool.len(),
        "Fetching squad"
    );
    let snapshot = source.fetch(team_id, previous_round).await?;

    recommend(solver, &snapshot.squad, snapshot.bank, &pool, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::solver::HiGHSSolver;
    use crate::domain::{Player, Position};
    use crate::port::outbound::squad::SquadSnapshot;
    use crate::testkit::domain::{player, pool_of, squad_of, standard_squad_players};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    fn market_players() -> Vec<Player> {
        let mut players = standard_squad_players(0);
        players.push(player(200, Position::Forward, "Club 200", 8.5, 20.0));
        players
    }

    #[test]
    fn test_recommend_runs_both_passes() {
        let players = market_players();
        let squad = squad_of(&players[..15]);
        let pool = pool_of(players);
        let params = RecommendParams::try_new(1, 1, 3).unwrap();

        let rec = recommend(
            Arc::new(HiGHSSolver::new()),
            &squad,
            dec!(0.5),
            &pool,
            &params,
        )
        .unwrap();

        assert_eq!(rec.current.formation.label(), "3-5-2");
        // 3-5-2 starters: GKP 4.5, three DEF at 5.0, five MID at 7.0, two FWD at 8.0.
        assert_eq!(rec.budget.lineup_value, dec!(70.5));
        assert_eq!(rec.budget.total, dec!(71.0));
        assert_eq!(rec.transfers.lineup.formation, rec.current.formation);
        assert_eq!(rec.transfers.plan.players_in[0].id.value(), 200);
        assert!(rec.gain() > 0.0);
    }

    #[test]
    fn test_params_reject_bad_values() {
        assert!(matches!(
            RecommendParams::try_new(0, 1, 3),
            Err(DomainError::ZeroRoundAhead)
        ));
        assert!(matches!(
            RecommendParams::try_new(1, 12, 3),
            Err(DomainError::TransferCount { .. })
        ));
    }

    struct FixedSquad(SquadSnapshot);

    #[async_trait]
    impl SquadSource for FixedSquad {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn fetch(&self, _team_id: u64, round: u32) -> Result<SquadSnapshot> {
            assert_eq!(round, 7);
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_recommend_for_team_uses_previous_round() {
        use crate::domain::PredictionRecord;

        let players = market_players();
        let records = players
            .iter()
            .map(|p| PredictionRecord {
                id: p.id,
                round: 8,
                points: Some(p.points),
                points_cumulative: Some(p.points_cumulative),
                position: p.position,
                name: p.name.clone(),
                club: p.club.clone(),
                cost: p.cost,
            })
            .collect();
        let predictions = PredictionSet::new(records);
        let source = FixedSquad(SquadSnapshot {
            squad: squad_of(&players[..15]),
            bank: dec!(0.5),
        });
        let params = RecommendParams::try_new(1, 1, 3).unwrap();

        let rec = tokio_test::block_on(recommend_for_team(
            Arc::new(HiGHSSolver::new()),
            &source,
            42,
            &predictions,
            &params,
        ))
        .unwrap();

        assert_eq!(rec.n_transfers, 1);
        assert_eq!(rec.transfers.plan.len(), 1);
    }
}
