//! Error types and exit codes for compass
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or unreadable campus data)
//!
//! Routing outcomes such as an unreachable destination or an absent edge are
//! not errors; they are reported as values by the graph engine.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the compass binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed data files (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading campus data or running commands
#[derive(Error, Debug)]
pub enum CompassError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("failed to read {path:?}: {reason}")]
    DataFile { path: PathBuf, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),

    #[error("interrupted; remaining commands were not run")]
    Interrupted,
}

impl CompassError {
    /// Create an error for a data file that could not be opened or parsed
    pub fn data_file(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        CompassError::DataFile {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CompassError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CompassError::UsageError(_) | CompassError::InvalidValue { .. } => ExitCode::Usage,

            CompassError::DataFile { .. } | CompassError::Csv(_) => ExitCode::Data,

            CompassError::Io(_)
            | CompassError::Json(_)
            | CompassError::Toml(_)
            | CompassError::Other(_)
            | CompassError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CompassError::UsageError(_) => "usage_error",
            CompassError::InvalidValue { .. } => "invalid_value",
            CompassError::DataFile { .. } => "data_file",
            CompassError::Csv(_) => "csv_error",
            CompassError::Io(_) => "io_error",
            CompassError::Json(_) => "json_error",
            CompassError::Toml(_) => "toml_error",
            CompassError::Other(_) => "other",
            CompassError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for compass operations
pub type Result<T> = std::result::Result<T, CompassError>;
