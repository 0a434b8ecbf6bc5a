//! Shared testing utilities for odoogen CLI tests.

use assert_cmd::Command;
use odoogen::domain::ComposeFile;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Answers for a run that picks Odoo 13.0, sets the database password to
/// `secret`, keeps every other default, and declines the launch.
#[allow(dead_code)]
pub const DEFAULT_ANSWERS: &str = "1\n\n\n\nsecret\n\n\nY\nY\nN\n";

/// Testing harness providing an isolated deployment directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("deploy");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `odoogen` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("odoogen").expect("Failed to locate odoogen binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    pub fn compose(&self) -> ComposeFile {
        ComposeFile::from_yaml(&self.read("docker-compose.yaml"))
            .expect("docker-compose.yaml should parse")
    }

    pub fn assert_layout_exists(&self) {
        for dir in ["addons", "enterprise-addons", "config", "odoo-web-data", "odoo-db-data", "odoo-logs"] {
            assert!(self.path(dir).is_dir(), "{} should exist", dir);
        }
    }

    pub fn assert_nothing_written(&self) {
        for file in ["docker-compose.yaml", "config/odoo.conf", "postgresql_password"] {
            assert!(!self.path(file).exists(), "{} should not exist", file);
        }
    }
}
