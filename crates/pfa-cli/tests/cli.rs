//! Runs the built `pfa-screen` binary.

use std::path::Path;
use std::process::{Command, Output};

fn pfa_screen(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pfa-screen"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("PFA_CONFIG")
        .env("RUST_LOG", "info")
        .output()
        .unwrap()
}

fn srq20_request(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("request.json");
    let answers = vec!["false"; 20].join(", ");
    std::fs::write(
        &path,
        format!(r#"{{"instrument_id": "SRQ-20", "answers": [{answers}]}}"#),
    )
    .unwrap();
    path
}

#[test]
fn migration_is_logged_after_logging_starts() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"srq29_trigger": "anxiety_depression"}"#).unwrap();
    let request = srq20_request(dir.path());

    let output = pfa_screen(
        &config,
        &["--json-logs", "score", "--input", request.to_str().unwrap()],
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("migrated config"), "stderr: {stderr}");
}

#[test]
fn listing_ignores_a_broken_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, "{ not json").unwrap();

    let listed = pfa_screen(&config, &["instruments"]);
    assert!(listed.status.success());
    let summaries: serde_json::Value = serde_json::from_slice(&listed.stdout).unwrap();
    assert_eq!(summaries.as_array().unwrap().len(), 3);

    let items = pfa_screen(&config, &["items", "SRQ-29"]);
    assert!(items.status.success());

    let request = srq20_request(dir.path());
    let scored = pfa_screen(&config, &["score", "--input", request.to_str().unwrap()]);
    assert!(!scored.status.success());
}

#[test]
fn init_config_writes_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("nested").join("config.json");

    let output = pfa_screen(&config, &["init-config"]);

    assert!(output.status.success());
    let loaded = pfa_cli::config::load_config(&config).unwrap();
    assert!(loaded.from_file);
    assert_eq!(loaded.config.config_version, 1);
}

#[test]
fn score_prints_result_json() {
    let dir = tempfile::tempdir().unwrap();
    let request = srq20_request(dir.path());

    let output = pfa_screen(
        &dir.path().join("absent.json"),
        &["score", "--input", request.to_str().unwrap()],
    );

    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["instrument_id"], "SRQ-20");
    assert_eq!(result["referral_needed"], false);
}
