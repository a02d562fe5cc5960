//! Shared testing utilities for learnpath CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Command for the compiled `learnpath` binary with no LLM credential.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("learnpath").expect("Failed to locate learnpath binary");
        cmd.current_dir(self.work_dir()).env_remove("MISTRAL_API_KEY").env_remove("RUST_LOG");
        cmd
    }

    /// Command whose LLM calls go to `api_url` with a test credential.
    pub fn cli_with_llm(&self, api_url: &str) -> Command {
        self.write_config(&format!("[llm]\napi_url = \"{}\"\ntimeout_secs = 5\n", api_url));
        let mut cmd = self.cli();
        cmd.env("MISTRAL_API_KEY", "test-key");
        cmd
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.work_dir().join(".learnpath");
        fs::create_dir_all(&dir).expect("Failed to create .learnpath");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    pub fn store_path(&self) -> PathBuf {
        self.work_dir().join(".learnpath/store.json")
    }

    /// Create a project and return its id.
    pub fn create_project(&self, user: &str) -> String {
        let output = self
            .cli()
            .args(["project", "create", "--user", user, "--title", "Todo App"])
            .args(["--description", "A simple todo list", "--language", "JavaScript"])
            .output()
            .expect("Failed to run project create");
        assert!(output.status.success(), "project create failed: {:?}", output);

        let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
        stdout
            .split_whitespace()
            .nth(3)
            .expect("project id in output")
            .to_string()
    }
}
