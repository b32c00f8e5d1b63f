//! Error types for key-player analysis.

use thiserror::Error;

/// Main error type for key-player operations.
#[derive(Debug, Error)]
pub enum KeyPlayerError {
    /// A caller-supplied parameter is out of its valid range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A caller-supplied node name is not present in the graph.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// The graph violates the simple-undirected precondition.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// The GPU shortest-path backend was requested but not compiled in.
    #[error("GPU shortest-path backend not available (build with the `gpu` feature)")]
    GpuUnavailable,

    /// Error reported by the GPU runtime.
    #[error("GPU error: {0}")]
    Gpu(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for key-player operations.
pub type Result<T> = std::result::Result<T, KeyPlayerError>;
