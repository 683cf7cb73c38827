//! Error types for the minidb connector.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// All possible errors from the connector.
///
/// Malformed record content is deliberately absent: the decoder recovers it
/// per record as [`crate::Content::Raw`] and never fails the batch.
#[derive(Debug, Error)]
pub enum Error {
    // Invocation errors
    #[error("engine not found at {path}: {source}")]
    EngineNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("engine rejected the request: {stderr}")]
    EngineRejected { code: Option<i32>, stderr: String },

    // Request construction errors
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type for connector operations.
pub type Result<T> = std::result::Result<T, Error>;
