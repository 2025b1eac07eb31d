//! Trait seams between the session orchestrator and its collaborators.
//!
//! `AccessGate` is implemented by the `quizgate-auth` crate against the
//! external authorization service, `ResultSink` by `quizgate-store`, and
//! `QuizTransport` by the console frontend in `quizgate-cli` (and by
//! [`crate::transport::ScriptedTransport`] for non-interactive callers).

use async_trait::async_trait;

use crate::error::QuizError;
use crate::model::{Question, ScoreRecord};

/// The capability a caller must hold to start a quiz run.
pub const START_TEST_ACTION: &str = "start_test";

/// Authorization boundary: code-for-token exchange and permission checks.
///
/// Both operations fail closed. Implementations must never propagate
/// transport or parse failures to the caller; they log a diagnostic and
/// return the denying value instead.
#[async_trait]
pub trait AccessGate: Send + Sync {
    /// Human-readable gate name (e.g. "http").
    fn name(&self) -> &str;

    /// Exchange an authorization code for an access token.
    ///
    /// Returns an empty string on any transport failure or malformed
    /// response.
    async fn exchange_code(&self, code: &str) -> String;

    /// Check whether `token` is valid and carries `action`.
    ///
    /// Returns `true` only if the validation endpoint reports the token as
    /// valid AND lists `action` among its permissions.
    async fn has_permission(&self, token: &str, action: &str) -> bool;
}

/// I/O surface for one quiz run: question presentation, answer input, and
/// outcome reporting.
///
/// The scoring engine drives this trait so the same logic serves an
/// interactive terminal and a scripted answer stream.
pub trait QuizTransport: Send {
    /// Show question `number` (1-based) with its options enumerated 1..N.
    fn present_question(&mut self, number: usize, question: &Question);

    /// Read one raw answer line.
    ///
    /// An error here (including end of the input stream) aborts the
    /// session; it is not the same as an invalid answer.
    fn read_answer(&mut self) -> std::io::Result<String>;

    /// Tell the user their answer was rejected and a value in `1..=max` is
    /// expected.
    fn reject_answer(&mut self, max: usize);

    /// Report how many questions were loaded, before the first question.
    fn report_loaded(&mut self, count: usize);

    /// Report the final score, total, and percentage.
    fn report_outcome(&mut self, record: &ScoreRecord);
}

/// Destination for the completed score record.
pub trait ResultSink: Send + Sync {
    /// Persist `record`, replacing whatever the destination held before.
    fn save(&self, record: &ScoreRecord) -> Result<(), QuizError>;
}
