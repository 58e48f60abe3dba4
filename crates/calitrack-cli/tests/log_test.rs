mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_log_creates_session_document() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args([
            "log",
            "--date",
            "2025-06-01",
            "--split",
            "push",
            "--entry",
            "Dips=8@10kg,10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged Push session for 2025-06-01"));

    let sessions = fixture.read_sessions();
    let sessions = sessions.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["split"], "Push");
    assert_eq!(sessions[0]["date"], "2025-06-01");
    assert_eq!(sessions[0]["log"][0]["exercise"], "Dips");
    assert_eq!(sessions[0]["log"][0]["sets"][0]["reps"], 8);
    assert_eq!(sessions[0]["log"][0]["sets"][0]["weight"], 10.0);
    // Second set was logged bare: no weight key at all.
    assert!(sessions[0]["log"][0]["sets"][1].get("weight").is_none());
}

#[test]
fn test_log_rejects_empty_session() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args([
            "log",
            "--date",
            "2025-06-01",
            "--split",
            "push",
            "--entry",
            "Dips=",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no logged sets"));

    assert!(!fixture.sessions_path().exists());
}

#[test]
fn test_log_without_entries_is_rejected() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args(["log", "--split", "push"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no logged sets"));
}

#[test]
fn test_replace_overwrites_same_day_and_split() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args([
            "log",
            "--date",
            "2025-06-01",
            "--split",
            "push",
            "--replace",
            "--entry",
            "Dips=8@10kg",
        ])
        .assert()
        .success();

    fixture
        .cmd()
        .args([
            "log",
            "--date",
            "2025-06-01",
            "--split",
            "push",
            "--replace",
            "--entry",
            "Dips=10@12kg",
        ])
        .assert()
        .success();

    let sessions = fixture.read_sessions();
    let sessions = sessions.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["log"][0]["sets"][0]["weight"], 12.0);
}

#[test]
fn test_default_append_keeps_duplicates() {
    let fixture = TestFixture::new();

    for _ in 0..2 {
        fixture
            .cmd()
            .args([
                "log",
                "--date",
                "2025-06-01",
                "--split",
                "push",
                "--entry",
                "Dips=8",
            ])
            .assert()
            .success();
    }

    assert_eq!(fixture.read_sessions().as_array().unwrap().len(), 2);
}

#[test]
fn test_log_uses_default_split_from_config() {
    let fixture = TestFixture::new();
    fixture.write_config("default_split = \"Pull\"\n");

    fixture
        .cmd()
        .args(["log", "--date", "2025-06-01", "--entry", "Pull-ups=6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged Pull session"));
}

#[test]
fn test_log_without_split_fails_without_config_default() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args(["log", "--date", "2025-06-01", "--entry", "Dips=8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No split given"));
}

#[test]
fn test_log_rejects_malformed_entry() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args(["log", "--split", "push", "--entry", "Dips=8@heavy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown resistance"));
}
