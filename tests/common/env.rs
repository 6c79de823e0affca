//! Test environment for driving the `reliefdesk` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Isolated data directory and home directory.
pub struct TestEnv {
    pub data_dir: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            data_dir: tempfile::tempdir().expect("Failed to create data dir"),
            home_dir: tempfile::tempdir().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_reliefdesk")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.data_dir.path().join(relative)
    }

    /// Run the CLI with the data directory as working directory.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_in(self.data_dir.path(), args)
    }

    pub fn run_in(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("RELIEF_DATA_DIR")
            .env_remove("RELIEF_OUTPUT")
            .env_remove("RELIEF_LOG_LEVEL")
            .env_remove("RELIEF_LOG")
            .output()
            .expect("Failed to execute reliefdesk");

        to_result(output)
    }

    /// Run and panic with full output when the command fails.
    pub fn run_ok(&self, args: &[&str]) -> TestResult {
        let result = self.run(args);
        assert!(
            result.is_success(),
            "reliefdesk {:?} failed (exit {}):\nstdout:\n{}\nstderr:\n{}",
            args,
            result.exit_code,
            result.stdout,
            result.stderr
        );
        result
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        std::fs::write(self.path(relative), content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    pub fn read_json(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(relative)).expect("Data file is not JSON")
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
