//! Table rendering for recommendations.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::output;
use crate::application::recommend::Recommendation;
use crate::application::selection::FormationScore;
use crate::domain::Player;

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "Pos")]
    position: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Club")]
    club: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Round")]
    points: String,
    #[tabled(rename = "Cumulative")]
    points_cumulative: String,
}

impl From<&Player> for PlayerRow {
    fn from(player: &Player) -> Self {
        Self {
            position: player.position.label(),
            name: player.name.clone(),
            club: player.club.clone(),
            cost: player.cost.round_dp(1).to_string(),
            points: output::points(player.points),
            points_cumulative: output::points(player.points_cumulative),
        }
    }
}

#[derive(Tabled)]
struct FormationRow {
    #[tabled(rename = "Formation")]
    formation: String,
    #[tabled(rename = "Score")]
    score: String,
}

impl From<&FormationScore> for FormationRow {
    fn from(candidate: &FormationScore) -> Self {
        Self {
            formation: candidate.formation.label(),
            score: candidate
                .score
                .map_or_else(|| "infeasible".to_string(), output::points),
        }
    }
}

/// Players as a table, in the order given.
#[must_use]
pub fn player_table(players: &[Player]) -> String {
    let mut table = Table::new(players.iter().map(PlayerRow::from));
    table.with(Style::rounded());
    table.to_string()
}

/// Formation scores as a table.
#[must_use]
pub fn formation_table(candidates: &[FormationScore]) -> String {
    let mut table = Table::new(candidates.iter().map(FormationRow::from));
    table.with(Style::rounded());
    table.to_string()
}

/// Print the human-readable report.
pub fn print(rec: &Recommendation) {
    output::section("Formations");
    output::lines(&formation_table(&rec.current.candidates));

    output::section("Current lineup");
    output::field("Formation", output::highlight(rec.current.formation));
    output::field("Score", output::points(rec.current.score));
    output::lines(&player_table(rec.current.lineup.players()));

    output::section("Bench");
    output::lines(&player_table(&rec.current.bench));

    output::section("Budget");
    output::field("Team value", rec.budget.lineup_value);
    output::field("Bank", rec.budget.bank);
    output::field("Total", rec.budget.total);

    let plan = &rec.transfers.plan;
    output::section(&format!(
        "Transfers ({} of {} allowed)",
        plan.len(),
        rec.n_transfers
    ));
    if plan.is_empty() {
        output::note("No transfers suggested");
    } else {
        output::field("Out", "");
        output::lines(&player_table(&plan.players_out));
        output::field("In", "");
        output::lines(&player_table(&plan.players_in));
    }

    output::section("New lineup");
    output::field("Formation", output::highlight(rec.transfers.lineup.formation));
    output::field("Score", output::points(rec.transfers.score));
    output::field("Gain", output::gain(rec.gain()));
    output::lines(&player_table(rec.transfers.lineup.players()));
}
