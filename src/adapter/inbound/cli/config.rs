//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use super::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    if output::is_json() {
        return output::json_document(&json!({ "created": path.display().to_string() }));
    }
    output::section("Config initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::note(&format!(
        "Next: set fpl.team_id, then run fplopt config validate {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        return output::json_document(&json!({
            "logging": { "level": config.logging.level, "format": config.logging.format },
            "optimiser": {
                "club_cap": config.optimiser.club_cap,
                "solver_time_limit_secs": config.optimiser.solver_time_limit_secs,
                "tie_break": config.optimiser.tie_break,
                "transfer_objective": config.optimiser.transfer_objective,
            },
            "fpl": {
                "api_url": config.fpl.api_url,
                "team_id": config.fpl.team_id,
                "timeout_secs": config.fpl.timeout_secs,
            },
            "data": { "predictions": config.data.predictions.display().to_string() },
        }));
    }

    output::section("Effective configuration");
    output::field("Log level", &config.logging.level);
    output::field("Log format", &config.logging.format);

    output::section("Optimiser");
    output::field("Club cap", config.optimiser.club_cap);
    output::field(
        "Time limit",
        format!("{}s", config.optimiser.solver_time_limit_secs),
    );
    output::field("Tie break", format!("{:?}", config.optimiser.tie_break).to_lowercase());
    output::field(
        "Objective",
        format!("{:?}", config.optimiser.transfer_objective).to_lowercase(),
    );

    output::section("Fantasy API");
    output::field("URL", &config.fpl.api_url);
    match config.fpl.team_id {
        Some(id) => output::field("Team id", id),
        None => output::field("Team id", "(not set)"),
    }
    output::field("Timeout", format!("{}s", config.fpl.timeout_secs));

    output::section("Data");
    output::field("Predictions", config.data.predictions.display());
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        return output::json_document(&json!({
            "valid": true,
            "path": path.display().to_string(),
        }));
    }

    output::success(&format!("{} is valid", path.display()));
    if config.fpl.team_id.is_none() {
        output::warning("fpl.team_id is not set; pass --team-id or set FPLOPT_TEAM_ID");
    }
    Ok(())
}
