//! Isolated environment for running the `fauxdict` binary.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{FAST_CONFIG, word_payload};

/// Temp data directory plus helpers to seed it and run the CLI against it.
///
/// # Example
/// ```no_run
/// use fauxdict_testing::TestWorld;
///
/// let world = TestWorld::new().with_words(&["Blorft (n.): a soft thud"]);
/// let result = world.run(&["list", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// New environment with a fast paging config and no word list.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("fauxdict");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let world = Self { temp_dir, data_dir };
        world.write_config(FAST_CONFIG);
        world
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `words.json` into the data directory.
    pub fn with_words(self, words: &[&str]) -> Self {
        self.write_payload(&word_payload(words));
        self
    }

    pub fn write_payload(&self, body: &str) {
        std::fs::write(self.data_dir.join("words.json"), body).expect("Failed to write payload");
    }

    pub fn write_config(&self, body: &str) {
        std::fs::write(self.data_dir.join("config.toml"), body).expect("Failed to write config");
    }

    pub fn preference_file(&self) -> PathBuf {
        self.data_dir.join("preferences.toml")
    }

    /// Run `fauxdict` with `--data-dir` pointing at this world.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("fauxdict")
            .map_err(|e| anyhow::anyhow!("Failed to find fauxdict binary: {}", e))?;

        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .args(args)
            .env_remove("FAUXDICT_PATH")
            .env_remove("RUST_LOG");

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI run.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
