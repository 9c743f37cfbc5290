//! CLI integration tests
//!
//! Tests the rollup-rotator binary end-to-end. Everything here runs offline:
//! unreachable endpoints point at closed loopback ports.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Binary with pool, sticky and settings files isolated in `dir`
fn rotator(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rollup-rotator").unwrap();
    cmd.arg("--file")
        .arg(dir.join("endpoints.json"))
        .arg("--current")
        .arg(dir.join("current.json"))
        .arg("--config")
        .arg(dir.join("config.toml"));
    cmd
}

fn workspace() -> TempDir {
    tempfile::tempdir().unwrap()
}

// ==================== Basic CLI tests ====================

#[test]
fn test_version() {
    Command::cargo_bin("rollup-rotator")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rollup-rotator"));
}

#[test]
fn test_help() {
    Command::cargo_bin("rollup-rotator")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sticky failover"))
        .stdout(predicate::str::contains("pick"));
}

// ==================== Pool management ====================

#[test]
fn test_list_empty() {
    let dir = workspace();
    rotator(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No endpoints"));
}

#[test]
fn test_add_list_remove() {
    let dir = workspace();

    rotator(dir.path())
        .args(["add", "--url", "https://arb1.publicnode.com", "--tag", "pub-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: https://arb1.publicnode.com tag=pub-a"));

    rotator(dir.path())
        .args(["add", "--url", "https://arb1.private.example/rpc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tag=-"));

    rotator(dir.path())
        .args(["add", "--url", "https://arb1.publicnode.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already present"));

    rotator(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "00. https://arb1.publicnode.com  tag=pub-a",
        ))
        .stdout(predicate::str::contains(
            "01. https://arb1.private.example/rpc  tag=-",
        ));

    rotator(dir.path())
        .args(["remove", "--url", "https://arb1.publicnode.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: https://arb1.publicnode.com"));

    rotator(dir.path())
        .args(["remove", "--url", "https://arb1.publicnode.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to remove"));

    let saved = std::fs::read_to_string(dir.path().join("endpoints.json")).unwrap();
    let pool: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(pool["endpoints"].as_array().unwrap().len(), 1);
}

#[test]
fn test_list_reads_existing_pool() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("endpoints.json"),
        r#"{"chain_id": 42161, "endpoints": [{"url": "https://arb1.example/rpc", "tag": "priv1"}]}"#,
    )
    .unwrap();

    rotator(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("chain_id=42161"))
        .stdout(predicate::str::contains("00. https://arb1.example/rpc  tag=priv1"));
}

#[test]
fn test_malformed_pool_fails() {
    let dir = workspace();
    std::fs::write(dir.path().join("endpoints.json"), "{ nope").unwrap();

    rotator(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

// ==================== Selection ====================

#[test]
fn test_empty_pool() {
    let dir = workspace();

    rotator(dir.path())
        .arg("test")
        .assert()
        .success()
        .stdout(predicate::str::contains("No endpoints to test"));

    rotator(dir.path())
        .arg("pick")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No endpoints in"));

    rotator(dir.path())
        .arg("best")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No endpoints in"));

    rotator(dir.path()).arg("use").assert().failure();

    assert!(!dir.path().join("current.json").exists());
}

#[test]
fn test_use_returns_sticky_without_pool() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("current.json"),
        r#"{"picked_at": 1717000000, "url": "https://pinned.example/rpc", "score": 0.9, "latency_ms": 80.0, "head": 100}"#,
    )
    .unwrap();

    rotator(dir.path())
        .arg("use")
        .assert()
        .success()
        .stdout("https://pinned.example/rpc\n");
}

#[test]
fn test_use_sticky_ignores_broken_settings() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("current.json"),
        r#"{"picked_at": 1717000000, "url": "https://pinned.example/rpc", "score": 0.9, "latency_ms": 80.0, "head": 100}"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("config.toml"), "[settings\ntimeout_seconds = ").unwrap();
    std::fs::write(dir.path().join("endpoints.json"), "{ nope").unwrap();

    rotator(dir.path())
        .arg("use")
        .assert()
        .success()
        .stdout("https://pinned.example/rpc\n");
}

#[test]
fn test_pick_all_unreachable_still_picks_first() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("endpoints.json"),
        r#"{"endpoints": [{"url": "http://127.0.0.1:1"}, {"url": "http://127.0.0.1:9"}]}"#,
    )
    .unwrap();

    rotator(dir.path())
        .args(["--timeout", "2", "pick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Picked: http://127.0.0.1:1 score=0"));

    let saved = std::fs::read_to_string(dir.path().join("current.json")).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(saved["url"], "http://127.0.0.1:1");
    assert_eq!(saved["head"], -1);

    // Now sticky
    rotator(dir.path())
        .arg("use")
        .assert()
        .success()
        .stdout("http://127.0.0.1:1\n");
}

#[test]
fn test_test_reports_errors() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("endpoints.json"),
        r#"{"endpoints": [{"url": "http://127.0.0.1:1"}]}"#,
    )
    .unwrap();

    rotator(dir.path())
        .args(["--timeout", "2", "test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("url=http://127.0.0.1:1"))
        .stdout(predicate::str::contains("ERR="));

    rotator(dir.path())
        .args(["--timeout", "2", "test", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ok\": false"))
        .stdout(predicate::str::contains("\"drift\": null"));
}

#[test]
fn test_quiet_silences_warnings() {
    let dir = workspace();
    let current = dir.path().join("current.json");
    std::fs::write(
        dir.path().join("endpoints.json"),
        r#"{"endpoints": [{"url": "http://127.0.0.1:1"}]}"#,
    )
    .unwrap();

    std::fs::write(&current, "{\"url\": ").unwrap();
    rotator(dir.path())
        .args(["--timeout", "2", "-q", "use"])
        .assert()
        .success()
        .stdout("http://127.0.0.1:1\n")
        .stderr(predicate::str::is_empty());

    std::fs::write(&current, "{\"url\": ").unwrap();
    rotator(dir.path())
        .args(["--timeout", "2", "use"])
        .assert()
        .success()
        .stdout("http://127.0.0.1:1\n")
        .stderr(predicate::str::contains("Ignoring malformed sticky selection"));
}

#[test]
fn test_quiet_drops_informational_output() {
    let dir = workspace();

    rotator(dir.path())
        .args(["--quiet", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    rotator(dir.path())
        .args(["config", "show", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timeout_seconds = 6"))
        .stdout(predicate::str::contains("# ").not());
}

// ==================== Config ====================

#[test]
fn test_config_path() {
    let dir = workspace();
    rotator(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_merges_flags() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("config.toml"),
        "[settings]\ntimeout_seconds = 9\n\n[scoring]\nlatency_budget_ms = 900.0\n",
    )
    .unwrap();

    rotator(dir.path())
        .args(["--concurrency", "3", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timeout_seconds = 9"))
        .stdout(predicate::str::contains("concurrency = 3"))
        .stdout(predicate::str::contains("latency_budget_ms = 900.0"));
}

#[test]
fn test_invalid_policy_rejected() {
    let dir = workspace();
    std::fs::write(
        dir.path().join("config.toml"),
        "[scoring]\nlatency_budget_ms = 0.0\n",
    )
    .unwrap();

    rotator(dir.path())
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid scoring policy"));
}
