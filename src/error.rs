//! Error types for Devtrail
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Devtrail operations
///
/// This enum encompasses all possible errors that can occur while
/// validating sessions, rendering reports, writing artifacts, and
/// talking to the git and test-runner collaborators.
#[derive(Error, Debug)]
pub enum DevtrailError {
    /// Session or publish-report values that fail structural validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Report template missing or unparsable
    #[error("Template error: {0}")]
    Template(String),

    /// Directory creation or report write failure
    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        /// Path the operation was targeting
        path: String,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Git porcelain errors (branch detection, staging, commits)
    #[error("Git error: {0}")]
    Git(String),

    /// Test-runner subprocess errors (spawn failures, not failing suites)
    #[error("Test runner error: {0}")]
    TestRunner(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for Devtrail operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
