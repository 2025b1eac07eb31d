//! Session error types.
//!
//! One taxonomy for everything that can abort a quiz session, so callers
//! can map variants to exit codes and user-visible messages without string
//! matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a quiz session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question source could not be opened or read.
    #[error("cannot open question source {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The question source parsed but violates the schema.
    #[error("malformed question data: {0}")]
    MalformedData(String),

    /// The result destination could not be opened for writing.
    #[error("cannot write result to {path}: {source}")]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The authorization exchange produced no access token.
    #[error("could not obtain an access token")]
    TokenExchangeFailed,

    /// The token is valid but does not carry the required permission.
    #[error("access token does not grant '{0}'")]
    PermissionDenied(String),

    /// The answer stream failed or ended mid-session.
    #[error("failed to read answer: {0}")]
    AnswerRead(#[from] std::io::Error),
}

impl QuizError {
    /// Returns `true` for authorization denials, which get a dedicated
    /// user-visible message instead of a generic error line.
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            QuizError::TokenExchangeFailed | QuizError::PermissionDenied(_)
        )
    }
}
