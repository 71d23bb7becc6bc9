//! Common test utilities for Skewcheck integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const MULTI_SCENARIO: &str = "multiple-resolved-no-duplicates";

/// Path to a JSON statistics fixture
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(format!("{name}.json"))
}

/// Contents of a JSON statistics fixture
#[allow(dead_code)]
pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

/// A temporary working directory for the binary
#[allow(dead_code)]
pub struct TestWorkspace {
    pub temp: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Copy a statistics fixture into the workspace as `stats.json`
    pub fn copy_fixture(&self, name: &str) -> PathBuf {
        self.write_file("stats.json", &fixture(name))
    }

    /// Binary command running inside the workspace
    pub fn skewcheck(&self) -> Command {
        let mut cmd = skewcheck_cmd();
        cmd.current_dir(&self.path).env_remove("SKEWCHECK_LOG");
        cmd
    }
}

/// Command for the real skewcheck binary
#[allow(dead_code, deprecated)]
pub fn skewcheck_cmd() -> Command {
    Command::cargo_bin("skewcheck").expect("skewcheck binary should be built")
}
