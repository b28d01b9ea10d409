//! Error types and exit codes for graphwalk
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, heap contract violations)
//! - 2: Usage error (bad flags/args, source vertex out of range)
//! - 3: Data error (malformed graph description, bad config)

mod macros;

use thiserror::Error;

/// Exit codes for the graphwalk binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a graph or running an algorithm over it
#[derive(Error, Debug)]
pub enum GraphError {
    // Data errors (exit code 3)
    #[error("malformed graph at line {line}: {reason}")]
    Format { line: usize, reason: String },

    // Usage errors (exit code 2)
    #[error("vertex {vertex} is out of range (graph has vertices 1..={vertex_count})")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Heap contract violations (exit code 1). Reaching one of these means
    // an algorithm drove the heap incorrectly.
    #[error("extract-min called on an empty heap")]
    EmptyHeap,

    #[error("vertex {vertex} is already queued")]
    AlreadyQueued { vertex: usize },

    #[error("vertex {vertex} is not queued")]
    NotQueued { vertex: usize },

    #[error("vertex {vertex} exceeds heap capacity {capacity}")]
    VertexOutOfRange { vertex: usize, capacity: usize },

    #[error("key slice of length {len} cannot cover heap capacity {capacity}")]
    KeysTooShort { len: usize, capacity: usize },

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

impl GraphError {
    /// Create a format error for a given 1-based input line
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        GraphError::Format {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for a vertex outside `1..=vertex_count`
    pub fn invalid_vertex(vertex: usize, vertex_count: usize) -> Self {
        GraphError::InvalidVertex {
            vertex,
            vertex_count,
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::InvalidVertex { .. }
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::Format { .. } | GraphError::Toml(_) => ExitCode::Data,

            GraphError::EmptyHeap
            | GraphError::AlreadyQueued { .. }
            | GraphError::NotQueued { .. }
            | GraphError::VertexOutOfRange { .. }
            | GraphError::KeysTooShort { .. }
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::Format { .. } => "graph_format",
            GraphError::InvalidVertex { .. } => "invalid_vertex",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::EmptyHeap => "empty_heap",
            GraphError::AlreadyQueued { .. } => "already_queued",
            GraphError::NotQueued { .. } => "not_queued",
            GraphError::VertexOutOfRange { .. } => "vertex_out_of_range",
            GraphError::KeysTooShort { .. } => "keys_too_short",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            GraphError::Format { line, .. } => {
                error_obj["line"] = serde_json::json!(line);
            }
            GraphError::InvalidVertex {
                vertex,
                vertex_count,
            } => {
                error_obj["vertex"] = serde_json::json!(vertex);
                error_obj["vertex_count"] = serde_json::json!(vertex_count);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for graphwalk operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(GraphError::format(2, "bad").exit_code(), ExitCode::Data);
        assert_eq!(
            GraphError::invalid_vertex(7, 5).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(GraphError::EmptyHeap.exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_format_error_message_names_line() {
        let err = GraphError::format(4, "expected 3 fields, found 2");
        assert_eq!(
            err.to_string(),
            "malformed graph at line 4: expected 3 fields, found 2"
        );
    }

    #[test]
    fn test_invalid_vertex_message() {
        let err = GraphError::invalid_vertex(7, 5);
        assert_eq!(
            err.to_string(),
            "vertex 7 is out of range (graph has vertices 1..=5)"
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let json = GraphError::format(3, "negative weight").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "graph_format");
        assert_eq!(json["error"]["line"], 3);

        let json = GraphError::invalid_vertex(7, 5).to_json();
        assert_eq!(json["error"]["vertex"], 7);
        assert_eq!(json["error"]["vertex_count"], 5);
    }
}
