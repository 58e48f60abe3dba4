//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".calitrack");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn sessions_path(&self) -> PathBuf {
        self.data_dir.join("sessions.json")
    }

    /// Command with the fixture's data dir preconfigured.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("calitrack").expect("Failed to find calitrack binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    pub fn write_sessions(&self, json: &str) {
        fs::write(self.sessions_path(), json).expect("Failed to seed sessions.json");
    }

    pub fn write_config(&self, toml: &str) {
        fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to seed config.toml");
    }

    pub fn read_sessions(&self) -> serde_json::Value {
        let content =
            fs::read_to_string(self.sessions_path()).expect("Failed to read sessions.json");
        serde_json::from_str(&content).expect("sessions.json is not valid JSON")
    }
}
