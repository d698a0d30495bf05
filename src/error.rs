//! Error types for envcheck operations.
//!
//! This module defines [`EnvcheckError`], the error type used for conditions
//! that are genuinely unexpected, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing package or a failed import is not an error: probes return
//!   [`CheckResult`](crate::probes::CheckResult) values describing it
//! - Runner-level failures (spawn, wait, timeout) are `EnvcheckError`s that
//!   each probe turns into a printed failure line
//! - Only startup failures (bad config) propagate to `main`

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for envcheck operations.
#[derive(Debug, Error)]
pub enum EnvcheckError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The external program could not be started.
    #[error("Failed to run '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    /// The external program ran but exited unsuccessfully.
    #[error("Command '{command}' {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// The external program did not finish in time and was killed.
    #[error("Command '{program}' timed out after {} seconds", .timeout.as_secs())]
    Timeout { program: String, timeout: Duration },

    /// A package name that is not a dotted Python identifier.
    #[error("Invalid package name '{name}'")]
    InvalidPackageName { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("failed with exit code {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

/// Result type alias for envcheck operations.
pub type Result<T> = std::result::Result<T, EnvcheckError>;
