//! Error types and exit codes for pathfinder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage or contract error (bad flags/args, out-of-range access)
//! - 3: Data error (missing map, unknown node, malformed map)
//!
//! "No path exists" is a valid search outcome and never an error.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::{ArcId, NodeId};

/// Exit codes for the pathfinder binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or a violated call contract (2)
    Usage = 2,
    /// Data error - missing map, unknown node, invalid map (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or running the engines
#[derive(Error, Debug)]
pub enum PathfinderError {
    // Usage and contract errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("index {index} out of range for path of {len} arcs")]
    OutOfRange { index: usize, len: usize },

    #[error("arc {arc} starts at node {start} but the path ends at node {endpoint}")]
    DisconnectedArc {
        arc: ArcId,
        start: NodeId,
        endpoint: NodeId,
    },

    // Data errors (exit code 3)
    #[error("node not found: {name}")]
    NodeNotFound { name: String },

    #[error("duplicate node: {name}")]
    DuplicateNode { name: String },

    #[error("invalid cost {cost} on arc {start} -> {finish}")]
    InvalidCost {
        start: String,
        finish: String,
        cost: f64,
    },

    #[error("map not found: {path:?}")]
    MapNotFound { path: PathBuf },

    #[error("invalid map {path:?}: {reason}")]
    InvalidMap { path: PathBuf, reason: String },

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

impl PathfinderError {
    /// Create an error for a node name that is not in the graph
    pub fn node_not_found(name: impl Into<String>) -> Self {
        PathfinderError::NodeNotFound { name: name.into() }
    }

    /// Create an error for a map document that cannot be used
    pub fn invalid_map(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        PathfinderError::InvalidMap {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathfinderError::UsageError(_)
            | PathfinderError::OutOfRange { .. }
            | PathfinderError::DisconnectedArc { .. } => ExitCode::Usage,

            PathfinderError::NodeNotFound { .. }
            | PathfinderError::DuplicateNode { .. }
            | PathfinderError::InvalidCost { .. }
            | PathfinderError::MapNotFound { .. }
            | PathfinderError::InvalidMap { .. }
            | PathfinderError::Json(_)
            | PathfinderError::Toml(_) => ExitCode::Data,

            PathfinderError::Io(_) | PathfinderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathfinderError::UsageError(_) => "usage_error",
            PathfinderError::OutOfRange { .. } => "out_of_range",
            PathfinderError::DisconnectedArc { .. } => "disconnected_arc",
            PathfinderError::NodeNotFound { .. } => "node_not_found",
            PathfinderError::DuplicateNode { .. } => "duplicate_node",
            PathfinderError::InvalidCost { .. } => "invalid_cost",
            PathfinderError::MapNotFound { .. } => "map_not_found",
            PathfinderError::InvalidMap { .. } => "invalid_map",
            PathfinderError::Io(_) => "io_error",
            PathfinderError::Json(_) => "json_error",
            PathfinderError::Toml(_) => "toml_error",
            PathfinderError::Other(_) => "other",
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

/// Result type alias for pathfinder operations
pub type Result<T> = std::result::Result<T, PathfinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            PathfinderError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            PathfinderError::OutOfRange { index: 3, len: 1 }.exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            PathfinderError::node_not_found("Denver").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            PathfinderError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = PathfinderError::node_not_found("Atlantis");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "node_not_found");
        assert_eq!(json["error"]["message"], "node not found: Atlantis");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = PathfinderError::OutOfRange { index: 5, len: 2 };
        assert_eq!(err.to_string(), "index 5 out of range for path of 2 arcs");
    }
}
