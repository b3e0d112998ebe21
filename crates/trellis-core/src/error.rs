//! Error types and exit codes for trellis
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, unreachable target, malformed graph input)

use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, unreachable target, malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during trellis operations
#[derive(Error, Debug)]
pub enum TrellisError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown node: {label}")]
    UnknownNode { label: String },

    #[error("no edge between {from} and {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("no path from {from} to {to}")]
    Unreachable { from: String, to: String },

    #[error("graph is disconnected: spanning tree covers {covered} of {total} nodes")]
    DisconnectedGraph { covered: usize, total: usize },

    #[error("invalid graph input at line {line}: {reason}")]
    InvalidGraphLine { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TrellisError {
    /// Create an error for a label missing from the graph
    pub fn unknown_node(label: impl Into<String>) -> Self {
        TrellisError::UnknownNode {
            label: label.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            TrellisError::UnknownFormat(_) | TrellisError::UsageError(_) => ExitCode::Usage,

            // Data errors
            TrellisError::UnknownNode { .. }
            | TrellisError::EdgeNotFound { .. }
            | TrellisError::Unreachable { .. }
            | TrellisError::DisconnectedGraph { .. }
            | TrellisError::InvalidGraphLine { .. } => ExitCode::Data,

            // Generic failures
            TrellisError::Io(_) | TrellisError::Json(_) | TrellisError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TrellisError::UnknownFormat(_) => "unknown_format",
            TrellisError::UsageError(_) => "usage_error",
            TrellisError::UnknownNode { .. } => "unknown_node",
            TrellisError::EdgeNotFound { .. } => "edge_not_found",
            TrellisError::Unreachable { .. } => "unreachable",
            TrellisError::DisconnectedGraph { .. } => "disconnected_graph",
            TrellisError::InvalidGraphLine { .. } => "invalid_graph_line",
            TrellisError::Io(_) => "io_error",
            TrellisError::Json(_) => "json_error",
            TrellisError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, TrellisError>;
