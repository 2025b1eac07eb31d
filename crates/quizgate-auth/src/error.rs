//! Authorization-service error types.
//!
//! These never cross the `AccessGate` trait boundary — the gate fails
//! closed and logs them instead — but keeping them typed lets the client
//! log precise diagnostics without string matching.

use thiserror::Error;

/// Failures when talking to the authorization service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The service returned a non-success status.
    #[error("auth service error (HTTP {status}): {message}")]
    ServiceError { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
