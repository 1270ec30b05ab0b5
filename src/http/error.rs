//! Error types for the request/response vocabulary.

use thiserror::Error;

/// Errors raised while building or reading requests and responses.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP method is not one the router knows about.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// A body was expected to be JSON but the Content-Type says otherwise.
    #[error("Request body is not JSON (Content-Type: {0})")]
    NotJson(String),

    /// Error serializing or deserializing JSON.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
