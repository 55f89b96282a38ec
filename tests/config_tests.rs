use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use fplopt::domain::{PointsMetric, TieBreak};
use fplopt::error::{ConfigError, Error};
use fplopt::infrastructure::config::settings::{Config, TEAM_ID_ENV};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

// Loading reads FPLOPT_TEAM_ID, so tests touching it run one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("fplopt-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

fn load(contents: &str) -> fplopt::error::Result<Config> {
    let path = write_temp_config(contents);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);
    result
}

#[test]
fn config_full_file_parses() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let config = load(
        r#"
[logging]
level = "debug"
format = "json"

[optimiser]
club_cap = 2
solver_time_limit_secs = 5
tie_break = "last"
transfer_objective = "round"

[fpl]
api_url = "http://localhost:8080/api"
team_id = 4321
timeout_secs = 3
retry_max_attempts = 1

[data]
predictions = "data/preds.json"
"#,
    )
    .expect("valid config");

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.optimiser.club_cap, 2);
    assert_eq!(config.optimiser.solver_time_limit().as_secs(), 5);
    assert_eq!(config.optimiser.tie_break, TieBreak::Last);
    assert_eq!(config.optimiser.transfer_objective, PointsMetric::Round);
    assert_eq!(config.fpl.api_url, "http://localhost:8080/api");
    assert_eq!(config.fpl.timeout().as_secs(), 3);
    assert_eq!(config.fpl.retry_max_attempts, 1);
    assert_eq!(config.data.predictions, PathBuf::from("data/preds.json"));
    if std::env::var(TEAM_ID_ENV).is_err() {
        assert_eq!(config.fpl.team_id, Some(4321));
    }
}

#[test]
fn config_empty_file_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let config = load("").expect("empty config is valid");

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.optimiser.club_cap, 3);
    assert_eq!(config.optimiser.solver_time_limit_secs, 30);
    assert_eq!(config.optimiser.tie_break, TieBreak::First);
    assert_eq!(config.optimiser.transfer_objective, PointsMetric::Cumulative);
    assert_eq!(config.data.predictions, PathBuf::from("predictions.json"));
}

#[test]
fn config_rejects_zero_club_cap() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let result = load("[optimiser]\nclub_cap = 0\n");

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "club_cap", ..
        })) => {}
        Err(err) => panic!("Expected invalid club_cap error, got {err}"),
        Ok(config) => panic!(
            "Expected zero club cap to be rejected, got {}",
            config.optimiser.club_cap
        ),
    }
}

#[test]
fn config_rejects_zero_time_limit() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let result = load("[optimiser]\nsolver_time_limit_secs = 0\n");

    assert!(
        matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "solver_time_limit_secs",
                ..
            }))
        ),
        "Expected zero time limit to be rejected"
    );
}

#[test]
fn config_rejects_unknown_log_format() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let result = load("[logging]\nformat = \"xml\"\n");

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "format",
            ..
        }))
    ));
}

#[test]
fn config_rejects_bad_api_urls() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    assert!(matches!(
        load("[fpl]\napi_url = \"\"\n"),
        Err(Error::Config(ConfigError::MissingField { field: "api_url" }))
    ));
    assert!(matches!(
        load("[fpl]\napi_url = \"ftp://example.com\"\n"),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "api_url",
            ..
        }))
    ));
}

#[test]
fn config_rejects_unknown_tie_break() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let result = load("[optimiser]\ntie_break = \"random\"\n");

    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn config_missing_file_is_read_error() {
    let result = Config::load("/nonexistent/fplopt.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn config_team_id_from_environment() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let previous = std::env::var(TEAM_ID_ENV).ok();

    std::env::set_var(TEAM_ID_ENV, "98765");
    let parsed = load("[fpl]\nteam_id = 1\n");
    std::env::set_var(TEAM_ID_ENV, "not-a-number");
    let rejected = load("");

    match previous {
        Some(value) => std::env::set_var(TEAM_ID_ENV, value),
        None => std::env::remove_var(TEAM_ID_ENV),
    }

    assert_eq!(parsed.expect("valid config").fpl.team_id, Some(98765));
    assert!(matches!(
        rejected,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "FPLOPT_TEAM_ID",
            ..
        }))
    ));
}
