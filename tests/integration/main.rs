//! Integration tests for the doc-scan-checks CLI

use assert_cmd::cargo;
use doc_scan_checks::VERSION;
use predicates::prelude::*;
use tempfile::TempDir;

fn doc_scan_checks() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("doc-scan-checks"))
}

const SESSION: &str = r#"{
    "session_id": "sess-1",
    "state": "COMPLETED",
    "checks": [
        {
            "id": "auth-1",
            "type": "ID_DOCUMENT_AUTHENTICITY",
            "state": "COMPLETED",
            "resources_used": ["doc-1"],
            "report": { "recommendation": { "value": "APPROVE" }, "breakdown": [] },
            "created": "2021-06-01T10:00:00Z",
            "last_updated": "not-a-date"
        },
        {
            "id": "live-1",
            "type": "LIVENESS",
            "state": "PENDING",
            "generated_media": [{ "id": "m1", "type": "IMAGE" }]
        },
        {
            "id": "other-1",
            "type": "WATCHLIST_SCREENING"
        }
    ]
}"#;

fn write_session(temp: &TempDir, content: &str) -> String {
    let path = temp.path().join("session.json");
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_version() {
    doc_scan_checks()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("doc-scan-checks"));
}

#[test]
fn test_version_json() {
    doc_scan_checks()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_version_matches_library() {
    doc_scan_checks()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("doc-scan-checks v{VERSION}")));
}

#[test]
fn test_help() {
    doc_scan_checks()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("never as errors"));
}

#[test]
fn test_no_args_shows_info() {
    doc_scan_checks().assert().success().stdout(predicate::str::contains("doc-scan-checks v"));
}

#[test]
fn test_inspect_session() {
    let temp = TempDir::new().unwrap();
    let path = write_session(&temp, SESSION);

    doc_scan_checks()
        .args(["inspect", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("[COMPLETED] ID_DOCUMENT_AUTHENTICITY"))
        .stdout(predicate::str::contains("Recommendation: APPROVE"))
        .stdout(predicate::str::contains("[PENDING] LIVENESS"))
        .stdout(predicate::str::contains("WATCHLIST_SCREENING"))
        .stdout(predicate::str::contains("Last updated").not());
}

#[test]
fn test_inspect_json_output() {
    let temp = TempDir::new().unwrap();
    let path = write_session(&temp, SESSION);

    let output = doc_scan_checks().args(["--json", "inspect", &path]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let checks = value["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 3);
    assert_eq!(checks[0]["created"], "2021-06-01T10:00:00+00:00");
    assert!(checks[0]["last_updated"].is_null());
    assert_eq!(checks[1]["generated_media"], 1);
    assert_eq!(checks[2]["known_kind"], false);
}

#[test]
fn test_inspect_kind_filter() {
    let temp = TempDir::new().unwrap();
    let path = write_session(&temp, SESSION);

    doc_scan_checks()
        .args(["inspect", &path, "--kind", "liveness"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checks in"))
        .stdout(predicate::str::contains("live-1"))
        .stdout(predicate::str::contains("auth-1").not());
}

#[test]
fn test_inspect_kind_filter_no_match() {
    let temp = TempDir::new().unwrap();
    let path = write_session(&temp, SESSION);

    doc_scan_checks()
        .args(["inspect", &path, "--kind", "face-match"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No ID_DOCUMENT_FACE_MATCH checks found"));
}

#[test]
fn test_inspect_invalid_kind() {
    let temp = TempDir::new().unwrap();
    let path = write_session(&temp, SESSION);

    doc_scan_checks()
        .args(["inspect", &path, "--kind", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid check kind"));
}

#[test]
fn test_inspect_single_check_from_stdin() {
    doc_scan_checks()
        .args(["inspect", "-"])
        .write_stdin(r#"{"id": "abc123", "type": "ID_DOCUMENT_FACE_MATCH", "state": "COMPLETED"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Checks in stdin: 1"))
        .stdout(predicate::str::contains("ID: abc123"));
}

#[test]
fn test_inspect_empty_document() {
    doc_scan_checks()
        .args(["inspect", "-"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("No checks found in stdin."));
}

#[test]
fn test_inspect_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.json");

    doc_scan_checks()
        .args(["inspect", &path.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_inspect_malformed_json() {
    let temp = TempDir::new().unwrap();
    let path = write_session(&temp, "{ not json");

    doc_scan_checks()
        .args(["inspect", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse JSON"));
}
