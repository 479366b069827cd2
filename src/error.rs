//! Worker Error Types
//!
//! A closed error-kind enumeration so callers can tell transport, parse,
//! and engine failures apart instead of treating every failure alike.

use thiserror::Error;

/// Central error type for the worker
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("engine error: {0}")]
    Engine(String),

    #[error("worker pool error: {0}")]
    Pool(String),
}

/// Result type alias for worker operations
pub type WorkerResult<T> = Result<T, WorkerError>;
