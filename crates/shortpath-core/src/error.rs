//! Error types and exit codes for shortpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out-of-range vertex)
//! - 3: Data error (malformed graph file, invalid dictionary word)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during shortpath operations
#[derive(Error, Debug)]
pub enum PathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("vertex {vertex} out of range (graph has {num_vertices} vertices)")]
    InvalidVertex { vertex: usize, num_vertices: usize },

    #[error("start and end words must be different: {word}")]
    SameWord { word: String },

    // Data errors (exit code 3)
    #[error("malformed graph at line {line}: {reason}")]
    MalformedGraph { line: usize, reason: String },

    #[error("invalid word: {reason}")]
    InvalidWord { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl PathError {
    /// Create an error for a vertex id outside `[0, num_vertices)`
    pub fn invalid_vertex(vertex: usize, num_vertices: usize) -> Self {
        PathError::InvalidVertex {
            vertex,
            num_vertices,
        }
    }

    /// Create an error for a malformed graph file
    pub fn malformed_graph(line: usize, reason: impl Into<String>) -> Self {
        PathError::MalformedGraph {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathError::UnknownFormat(_)
            | PathError::UsageError(_)
            | PathError::InvalidVertex { .. }
            | PathError::SameWord { .. } => ExitCode::Usage,

            PathError::MalformedGraph { .. } | PathError::InvalidWord { .. } => ExitCode::Data,

            PathError::Io(_)
            | PathError::Json(_)
            | PathError::Toml(_)
            | PathError::FailedOperationWithTarget { .. }
            | PathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathError::UnknownFormat(_) => "unknown_format",
            PathError::UsageError(_) => "usage_error",
            PathError::InvalidVertex { .. } => "invalid_vertex",
            PathError::SameWord { .. } => "same_word",
            PathError::MalformedGraph { .. } => "malformed_graph",
            PathError::InvalidWord { .. } => "invalid_word",
            PathError::Io(_) => "io_error",
            PathError::Json(_) => "json_error",
            PathError::Toml(_) => "toml_error",
            PathError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            PathError::Other(_) => "other",
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

/// Result type alias for shortpath operations
pub type Result<T> = std::result::Result<T, PathError>;
