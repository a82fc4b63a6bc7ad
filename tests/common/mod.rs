#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the prose-guard binary.
#[macro_export]
macro_rules! prose_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("prose-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a basic prose-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".prose-guard.toml", content);
    }

    /// Creates a chapter file with a POV declaration header.
    pub fn create_chapter(&self, relative_path: &str, pov: &str, body: &str) {
        self.create_file(relative_path, &format!("【POV：{pov}】\n\n{body}"));
    }
}
