//! Integration tests for the `tinker` CLI binary.
//!
//! Routing commands and `--dry-run` need no backend; the remaining tests
//! point the binary at a wiremock server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `tinker` binary with env isolation.
///
/// Clears all `TINKER_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn tinker_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("tinker");
    cmd.env("HOME", "/tmp/tinker-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/tinker-cli-test-nonexistent")
        .env_remove("TINKER_CONFIG")
        .env_remove("TINKER_API_BASE_URL")
        .env_remove("TINKER_API_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run_blocking(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = tinker_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    tinker_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("resolve")
            .and(predicate::str::contains("sensors"))
            .and(predicate::str::contains("spaces"))
            .and(predicate::str::contains("query")),
    );
}

// ── Routing ─────────────────────────────────────────────────────────

#[test]
fn test_routes_table() {
    tinker_cmd().args(["routes", "-o", "table"]).assert().success().stdout(
        predicate::str::contains("/sensor/:id")
            .and(predicate::str::contains("SpaceDetail"))
            .and(predicate::str::contains("/locations").not()),
    );
}

#[test]
fn test_resolve_sensor_detail() {
    let output = tinker_cmd().args(["resolve", "/sensor/42"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({ "view": "SensorDetail", "params": { "id": "42" } })
    );
}

#[test]
fn test_resolve_unknown_path_exits_not_found() {
    tinker_cmd()
        .args(["resolve", "/unknown"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No view for path"));
}

#[test]
fn test_resolve_empty_id_exits_not_found() {
    tinker_cmd().args(["resolve", "/sensor/"]).assert().code(4);
}

#[test]
fn test_link_builds_detail_path() {
    let output = tinker_cmd()
        .args(["link", "Sensor", "--id", "42"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        stdout_json(&output),
        json!({ "view": "SensorDetail", "path": "/sensor/42" })
    );

    let output = tinker_cmd().args(["link", "Spaces"]).output().unwrap();
    assert_eq!(stdout_json(&output)["path"], "/spaces");
}

#[test]
fn test_link_rejects_bad_input() {
    tinker_cmd()
        .args(["link", "Location"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown route name"));
    tinker_cmd().args(["link", "Sensor"]).assert().code(2);
    tinker_cmd().args(["link", "Dashboard", "--id", "1"]).assert().code(2);
    tinker_cmd()
        .args(["link", "Space", "--id", "a/b"])
        .assert()
        .code(2);
}

// ── Dry run ─────────────────────────────────────────────────────────

#[test]
fn test_dry_run_uses_default_base_url() {
    let output = tinker_cmd()
        .args(["--dry-run", "sensors", "get", "42"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({ "method": "GET", "url": "http://ess-master1.local:5000/api/v1/sensor/42" })
    );
}

#[test]
fn test_dry_run_channel_query() {
    let output = tinker_cmd()
        .args([
            "--dry-run",
            "--base-url",
            "http://localhost:5000/api/v1",
            "query",
            "S1",
            "--channel",
            "C2",
            "--start",
            "2020-01-01",
            "--end",
            "2020-01-31",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["url"],
        "http://localhost:5000/api/v1/query/sensor/S1\
         ?channel=C2&startDateTime=2020-01-01T00:00:00MST&endDateTime=2020-01-31T00:00:00MST"
    );
}

#[test]
fn test_env_overrides_base_url() {
    let output = tinker_cmd()
        .env("TINKER_API_BASE_URL", "http://10.0.0.5:5000/api/v1")
        .args(["--dry-run", "spaces", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["url"],
        "http://10.0.0.5:5000/api/v1/spaces"
    );
}

#[test]
fn test_flag_beats_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    std::fs::write(&cfg, "[api]\nbase_url = \"http://from-file:5000/api/v1\"\n").unwrap();

    let from_file = tinker_cmd()
        .arg("--config")
        .arg(&cfg)
        .args(["--dry-run", "sensors", "list"])
        .output()
        .unwrap();
    assert_eq!(
        stdout_json(&from_file)["url"],
        "http://from-file:5000/api/v1/sensors"
    );

    let from_flag = tinker_cmd()
        .arg("--config")
        .arg(&cfg)
        .args(["--base-url", "http://from-flag/api", "--dry-run", "sensors", "list"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&from_flag)["url"], "http://from-flag/api/sensors");
}

#[test]
fn test_flag_replaces_invalid_env_base_url() {
    let output = tinker_cmd()
        .env("TINKER_API_BASE_URL", "not-a-url")
        .args(["--base-url", "http://ok.local/api", "--dry-run", "sensors", "list"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout_json(&output)["url"], "http://ok.local/api/sensors");
}

#[test]
fn test_flag_replaces_zero_timeout_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    std::fs::write(&cfg, "[api]\ntimeout_secs = 0\n").unwrap();

    tinker_cmd()
        .arg("--config")
        .arg(&cfg)
        .args(["--dry-run", "sensors", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("timeout_secs"));

    tinker_cmd()
        .arg("--config")
        .arg(&cfg)
        .args(["--timeout", "5", "--dry-run", "sensors", "list"])
        .assert()
        .success();
}

#[test]
fn test_open_dashboard_fetches_nothing() {
    let output = tinker_cmd()
        .args(["--dry-run", "open", "/"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!({ "view": "Dashboard", "params": {} }));
}

#[test]
fn test_invalid_base_url_is_usage_error() {
    tinker_cmd()
        .args(["--base-url", "ftp://nowhere", "--dry-run", "sensors", "list"])
        .assert()
        .code(2);
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("tinker").join("config.toml");

    tinker_cmd()
        .arg("--config")
        .arg(&cfg)
        .args(["--base-url", "http://lab-pi:5000/api/v1", "config", "init"])
        .assert()
        .success();
    assert!(cfg.exists());

    // A second init without --force refuses to clobber the file.
    tinker_cmd()
        .arg("--config")
        .arg(&cfg)
        .args(["config", "init"])
        .assert()
        .code(2);

    let output = tinker_cmd()
        .arg("--config")
        .arg(&cfg)
        .args(["config", "show"])
        .output()
        .unwrap();
    assert_eq!(
        stdout_json(&output)["api"]["base_url"],
        "http://lab-pi:5000/api/v1"
    );
}

// ── Live requests against a mock backend ────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_sensors_list_prints_body() {
    let server = MockServer::start().await;
    let body = json!([{ "externalId": "s1" }, { "externalId": "s2" }]);

    Mock::given(method("GET"))
        .and(path("/api/v1/sensors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = format!("{}/api/v1", server.uri());
    let mut cmd = tinker_cmd();
    cmd.args(["--base-url", base_url.as_str(), "sensors", "list"]);
    let output = run_blocking(cmd).await;

    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout_json(&output), body);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_open_space_detail_fetches_space() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/space/lab"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Lab" })))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = format!("{}/api/v1", server.uri());
    let mut cmd = tinker_cmd();
    cmd.args(["--base-url", base_url.as_str(), "open", "/space/lab"]);
    let output = run_blocking(cmd).await;

    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        stdout_json(&output),
        json!({ "view": "SpaceDetail", "params": { "id": "lab" }, "data": { "name": "Lab" } })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_channel_query_against_backend() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/query/sensor/S1"))
        .and(query_param("channel", "C2"))
        .and(query_param("startDateTime", "2020-01-01T00:00:00MST"))
        .and(query_param("endDateTime", "2020-01-31T00:00:00MST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = format!("{}/api/v1", server.uri());
    let mut cmd = tinker_cmd();
    cmd.args([
        "--base-url",
        base_url.as_str(),
        "-o",
        "json-compact",
        "query",
        "S1",
        "-c",
        "C2",
        "--start",
        "2020-01-01",
        "--end",
        "2020-01-31",
    ]);
    let output = run_blocking(cmd).await;

    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_backend_404_exits_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sensor/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_string("unknown sensor"))
        .mount(&server)
        .await;

    let base_url = format!("{}/api/v1", server.uri());
    let mut cmd = tinker_cmd();
    cmd.args(["--base-url", base_url.as_str(), "sensors", "get", "ghost"]);
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("HTTP 404"), "{stderr}");
}

#[test]
fn test_connection_refused_exits_connection() {
    tinker_cmd()
        .args(["--base-url", "http://127.0.0.1:1/api/v1", "spaces", "list"])
        .assert()
        .code(7);
}
