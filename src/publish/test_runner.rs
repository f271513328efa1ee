//! Test-runner subprocess wrapper
//!
//! Runs the project's configured test command through the shell and captures
//! the outcome. A failing suite is a normal result, not an error: only a
//! spawn failure surfaces as one.

use std::path::Path;
use tokio::process::Command;

use crate::error::{DevtrailError, Result};

/// Outcome of one test-suite run
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Whether the suite exited successfully
    pub success: bool,
    /// Captured stdout
    pub output: String,
    /// Captured stderr, present when the suite failed
    pub error: Option<String>,
}

/// Run the test suite in `working_dir`
///
/// # Errors
///
/// Returns a test-runner error when the command is empty or the shell
/// cannot be spawned. A non-zero exit from the suite itself is reported
/// through [`TestResult::success`], not as an error.
pub async fn run_tests(working_dir: &Path, command: &str) -> Result<TestResult> {
    if command.trim().is_empty() {
        return Err(DevtrailError::TestRunner("test command is empty".to_string()).into());
    }

    tracing::info!("Running test suite: {}", command);

    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(working_dir)
        .output()
        .await
        .map_err(|e| {
            DevtrailError::TestRunner(format!("failed to run '{}': {}", command, e))
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(TestResult {
            success: true,
            output: stdout,
            error: None,
        })
    } else {
        tracing::warn!("Test suite failed with status {}", output.status);
        let error = if stderr.trim().is_empty() {
            Some(format!("test command exited with {}", output.status))
        } else {
            Some(stderr)
        };
        Ok(TestResult {
            success: false,
            output: stdout,
            error,
        })
    }
}
