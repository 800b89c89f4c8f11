//! Error types and exit codes for campusnet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad vertex count, vertex index, or graph input)

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
    /// Data error - invalid size, index, or malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during campusnet operations
#[derive(Error, Debug)]
pub enum CampusError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("invalid size: {size} (vertex count must not be negative)")]
    InvalidSize { size: i64 },

    #[error("vertex {index} out of range (graph has {len} vertices)")]
    OutOfRange { index: usize, len: usize },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("negative weight {weight} on edge {u}-{v} (shortest paths need non-negative weights)")]
    NegativeWeight { u: usize, v: usize, weight: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl CampusError {
    /// Create an error for a vertex index outside `[0, len)`
    pub fn out_of_range(index: usize, len: usize) -> Self {
        CampusError::OutOfRange { index, len }
    }

    /// Create an error for malformed graph input at a 1-based line number
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        CampusError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CampusError::UnknownFormat(_) | CampusError::UsageError(_) => ExitCode::Usage,

            CampusError::InvalidSize { .. }
            | CampusError::OutOfRange { .. }
            | CampusError::Parse { .. }
            | CampusError::NegativeWeight { .. } => ExitCode::Data,

            CampusError::Io(_)
            | CampusError::Json(_)
            | CampusError::Toml(_)
            | CampusError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CampusError::UnknownFormat(_) => "unknown_format",
            CampusError::UsageError(_) => "usage_error",
            CampusError::InvalidSize { .. } => "invalid_size",
            CampusError::OutOfRange { .. } => "out_of_range",
            CampusError::Parse { .. } => "parse_error",
            CampusError::NegativeWeight { .. } => "negative_weight",
            CampusError::Io(_) => "io_error",
            CampusError::Json(_) => "json_error",
            CampusError::Toml(_) => "toml_error",
            CampusError::Other(_) => "other",
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

/// Result type alias for campusnet operations
pub type Result<T> = std::result::Result<T, CampusError>;
