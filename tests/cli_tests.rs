use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fplopt() -> Command {
    let mut cmd = Command::cargo_bin("fplopt").expect("binary built");
    cmd.env_remove("FPLOPT_TEAM_ID").args(["--color", "never"]);
    cmd
}

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    path.push(format!("fplopt-cli-test-{nanos}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

fn recommend_args() -> Vec<String> {
    vec![
        "recommend".into(),
        "--squad".into(),
        fixture("squad.json").display().to_string(),
        "--predictions".into(),
        fixture("predictions.json").display().to_string(),
    ]
}

#[test]
fn cli_lists_formations() {
    fplopt()
        .arg("formations")
        .assert()
        .success()
        .stdout(predicate::str::contains("4-4-2"))
        .stdout(predicate::str::contains("5-2-3"));
}

#[test]
fn cli_lists_formations_as_json() {
    let output = fplopt().args(["--json", "formations"]).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let labels: Vec<&str> = json["formations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(
        labels,
        ["4-4-2", "4-3-3", "4-5-1", "3-5-2", "3-4-3", "5-4-1", "5-3-2", "5-2-3"]
    );
}

#[test]
fn cli_validates_good_config() {
    let path = write_temp_config("[optimiser]\nclub_cap = 3\n\n[fpl]\nteam_id = 42\n");
    let assert = fplopt().args(["config", "validate"]).arg(&path).assert();
    let _ = fs::remove_file(&path);

    assert.success().stdout(predicate::str::contains("is valid"));
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let path = write_temp_config("[optimiser]\nclub_cap = 0\n");
    let assert = fplopt().args(["config", "validate"]).arg(&path).assert();
    let _ = fs::remove_file(&path);

    assert
        .failure()
        .stderr(predicate::str::contains("invalid value for club_cap"));
}

#[test]
fn cli_recommend_prints_report() {
    fplopt()
        .args(recommend_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Current lineup"))
        .stdout(predicate::str::contains("3-5-2"))
        .stdout(predicate::str::contains("Transfers (1 of 1 allowed)"))
        .stdout(predicate::str::contains("Watkins"))
        .stdout(predicate::str::contains("Isak"));
}

#[test]
fn cli_recommend_json_document() {
    let output = fplopt()
        .arg("--json")
        .args(recommend_args())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["current"]["formation"], "3-5-2");
    assert_eq!(json["n_transfers"], 1);
    assert_eq!(json["transfers"]["lineup"]["formation"], "3-5-2");

    let players_in = json["transfers"]["plan"]["players_in"].as_array().unwrap();
    let players_out = json["transfers"]["plan"]["players_out"].as_array().unwrap();
    assert_eq!(players_in.len(), 1);
    assert_eq!(players_out.len(), 1);
    assert_eq!(players_in[0]["name"], "Watkins");
    assert_eq!(players_out[0]["name"], "Isak");
}

#[test]
fn cli_recommend_zero_transfers() {
    fplopt()
        .args(recommend_args())
        .args(["--transfers", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transfers suggested"));
}

#[test]
fn cli_recommend_reports_missing_squad_players() {
    fplopt()
        .args([
            "recommend",
            "--squad",
            &fixture("bad_squad.json").display().to_string(),
            "--predictions",
            &fixture("predictions.json").display().to_string(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing from prediction pool: 99"));
}

#[test]
fn cli_recommend_rejects_too_many_transfers() {
    fplopt()
        .args(recommend_args())
        .args(["--transfers", "12"])
        .assert()
        .failure();
}

#[test]
fn cli_recommend_without_team_id_fails() {
    fplopt()
        .args([
            "recommend",
            "--predictions",
            &fixture("predictions.json").display().to_string(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("team_id"));
}
