//! Handler for the `recommend` command.

use tracing::info;

use super::command::RecommendArgs;
use super::{output, report};
use crate::adapter::outbound::file::{load_predictions, FileSquadSource};
use crate::adapter::outbound::fpl::FplClient;
use crate::application::recommend::{recommend_for_team, RecommendParams};
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::squad::SquadSource;

/// Execute `recommend`.
pub async fn execute(args: &RecommendArgs, config: &Config) -> Result<()> {
    let mut params =
        RecommendParams::try_new(args.round, args.transfers, config.optimiser.club_cap)?;
    params.tie_break = config.optimiser.tie_break;
    params.transfer_objective = config.optimiser.transfer_objective;

    let source: Box<dyn SquadSource> = match &args.squad {
        Some(path) => Box::new(FileSquadSource::new(path)),
        None => Box::new(FplClient::from_config(&config.fpl)),
    };
    // A squad file does not need a team id.
    let team_id = match args.team_id.or(config.fpl.team_id) {
        Some(id) => id,
        None if args.squad.is_some() => 0,
        None => {
            return Err(ConfigError::MissingField {
                field: "team_id",
            }
            .into())
        }
    };

    let predictions_path = args
        .predictions
        .clone()
        .unwrap_or_else(|| config.data.predictions.clone());
    let predictions = load_predictions(&predictions_path)?;
    info!(
        path = %predictions_path.display(),
        rows = predictions.len(),
        "Predictions loaded"
    );

    let solver = bootstrap::build_solver(config);
    let pb = output::spinner("Optimising lineup and transfers");
    let result = recommend_for_team(
        solver,
        source.as_ref(),
        team_id,
        &predictions,
        &params,
    )
    .await;
    let rec = match result {
        Ok(rec) => {
            output::spinner_success(&pb, "Optimised");
            rec
        }
        Err(e) => {
            output::spinner_fail(&pb);
            return Err(e);
        }
    };

    if output::is_json() {
        return output::json_document(&rec);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    report::print(&rec);
    Ok(())
}
