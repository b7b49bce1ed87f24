//! Error types for toolsmith-core

use thiserror::Error;

/// Result type alias for toolsmith-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tool registration and invocation
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Tool registration was rejected (missing docstring, empty name, no callable)
    #[error("Tool configuration invalid: {0}")]
    Configuration(String),

    /// The requested dispatch mode is not available for this tool
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// An offloaded invocation was cancelled before it completed
    #[error("Tool invocation cancelled: {0}")]
    Cancelled(String),

    /// The tool body reported a failure
    #[error("Tool execution failed: {0}")]
    Execution(String),

    /// No async runtime is available on the current thread
    #[error("No async runtime available: {0}")]
    NoRuntime(String),
}
