//! Completion error types

use thiserror::Error;

/// Errors from the hosted completion API.
///
/// Every variant is terminal for the request that triggered it; there is no
/// retry anywhere in the pipeline.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The HTTP request never completed (DNS, connect, timeout)
    #[error("Failed to reach completion API: {0}")]
    Transport(String),

    /// The API answered with a non-success status
    #[error("Completion API returned {status}: {body}")]
    ApiError { status: u16, body: String },

    /// The API answered 200 but the payload was not the expected shape
    #[error("Malformed completion response: {0}")]
    InvalidResponse(String),
}
