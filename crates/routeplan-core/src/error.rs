//! Error types and exit codes for routeplan
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid strategy)
//! - 3: Data error (missing or invalid network file)
//!
//! An unreachable goal, an infeasible tour and closing a road that does not
//! exist are ordinary results and never surface here.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the routeplan binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed network (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during routeplan operations
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown strategy '{0}' (expected: bfs, dfs)")]
    InvalidStrategy(String),

    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("road network not found (searched: {})", format_searched(.searched))]
    NetworkNotFound { searched: Vec<PathBuf> },

    #[error("invalid road network in {path:?}: {reason}")]
    InvalidNetwork { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

fn format_searched(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl RouteError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a network file that failed to parse or validate
    pub fn invalid_network(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RouteError::InvalidNetwork {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::InvalidStrategy(_)
            | RouteError::UnknownFormat(_)
            | RouteError::UsageError(_)
            | RouteError::InvalidValue { .. } => ExitCode::Usage,

            RouteError::NetworkNotFound { .. } | RouteError::InvalidNetwork { .. } => {
                ExitCode::Data
            }

            RouteError::Io(_)
            | RouteError::Toml(_)
            | RouteError::Json(_)
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteError::InvalidStrategy(_) => "invalid_strategy",
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::NetworkNotFound { .. } => "network_not_found",
            RouteError::InvalidNetwork { .. } => "invalid_network",
            RouteError::Io(_) => "io_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::Json(_) => "json_error",
            RouteError::Other(_) => "other",
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

/// Result type alias for routeplan operations
pub type Result<T> = std::result::Result<T, RouteError>;
