//! Test environment builder for isolated cdp testing.
//!
//! Provides `TestEnv` - an isolated temporary home directory holding the
//! `.cdp/config` and `.cdp/credentials` stores, plus helpers to run the
//! `cdp` binary against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::windows::WindowsCompatExt;

/// Result of running a cdp CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with a temporary home directory.
pub struct TestEnv {
    /// Temporary directory used as HOME
    pub home_dir: TempDir,
    /// Path to the cdp binary
    cdp_bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    pub fn config_path(&self) -> PathBuf {
        self.home_path(".cdp/config")
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.home_path(".cdp/credentials")
    }

    /// Run cdp in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run cdp in this environment with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.cdp_bin);
        cmd.current_dir(self.home_dir.path())
            .args(args)
            .with_test_home(self.home_dir.path());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute cdp");

        self.output_to_result(output)
    }

    /// Convert Command output to TestResult
    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Contents of the config store, empty if it does not exist
    pub fn read_config(&self) -> String {
        read_or_empty(&self.config_path())
    }

    /// Contents of the credentials store, empty if it does not exist
    pub fn read_credentials(&self) -> String {
        read_or_empty(&self.credentials_path())
    }

    /// Write a file to the home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        let full_path = self.home_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
}

fn read_or_empty(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    config: Option<String>,
    credentials: Option<String>,
}

impl TestEnvBuilder {
    /// Create a new builder with no store files
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `~/.cdp/config` with the given content
    pub fn with_config(mut self, content: &str) -> Self {
        self.config = Some(content.to_string());
        self
    }

    /// Write `~/.cdp/credentials` with the given content
    pub fn with_credentials(mut self, content: &str) -> Self {
        self.credentials = Some(content.to_string());
        self
    }

    /// Build the test environment
    pub fn build(self) -> TestEnv {
        let home_dir = TempDir::new().expect("Failed to create home temp dir");
        let env = TestEnv {
            home_dir,
            cdp_bin: PathBuf::from(env!("CARGO_BIN_EXE_cdp")),
        };

        if let Some(config) = &self.config {
            env.write_home_file(".cdp/config", config);
        }
        if let Some(credentials) = &self.credentials {
            env.write_home_file(".cdp/credentials", credentials);
        }

        env
    }
}
