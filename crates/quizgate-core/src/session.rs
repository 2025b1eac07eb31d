//! The session orchestrator.
//!
//! Sequences one quiz run end to end: authorize → load questions → score →
//! report → persist. Every stage fully completes before the next begins,
//! and any stage failure short-circuits the rest. The session holds no
//! mutable state between runs, so one `TestSession` can serve repeated
//! invocations.

use std::path::Path;
use std::sync::Arc;

use uuid::Uuid;

use crate::error::QuizError;
use crate::model::ScoreRecord;
use crate::parser;
use crate::scoring;
use crate::traits::{AccessGate, QuizTransport, ResultSink, START_TEST_ACTION};

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// How many questions the source supplied.
    pub loaded: usize,
    /// The computed score record.
    pub record: ScoreRecord,
    /// Whether the record reached the result sink. A failed save does not
    /// fail the run; the outcome has already been reported by then.
    pub persisted: bool,
}

/// One quiz run wired to an access gate and a result sink.
pub struct TestSession {
    gate: Arc<dyn AccessGate>,
    sink: Arc<dyn ResultSink>,
}

impl TestSession {
    pub fn new(gate: Arc<dyn AccessGate>, sink: Arc<dyn ResultSink>) -> Self {
        Self { gate, sink }
    }

    /// Run a full gated session.
    ///
    /// Authorization denial aborts before the question source is touched;
    /// no partial state is written on any failure path.
    pub async fn start_test(
        &self,
        source: &Path,
        code: &str,
        transport: &mut dyn QuizTransport,
    ) -> Result<SessionOutcome, QuizError> {
        let run_id = Uuid::new_v4();
        tracing::info!(%run_id, gate = self.gate.name(), "starting session");

        let token = self.gate.exchange_code(code).await;
        if token.is_empty() {
            tracing::info!(%run_id, "token exchange produced no token");
            return Err(QuizError::TokenExchangeFailed);
        }

        if !self.gate.has_permission(&token, START_TEST_ACTION).await {
            tracing::info!(%run_id, action = START_TEST_ACTION, "permission denied");
            return Err(QuizError::PermissionDenied(START_TEST_ACTION.to_string()));
        }

        let questions = parser::load_questions(source)?;
        let loaded = questions.len();
        transport.report_loaded(loaded);

        let score = scoring::run_quiz(&questions, transport)?;
        let record = ScoreRecord::new(score, loaded as u32);

        // Report before persisting: the score survives a failed save.
        transport.report_outcome(&record);

        let persisted = match self.sink.save(&record) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(%run_id, "failed to persist result: {e}");
                false
            }
        };

        tracing::info!(
            %run_id,
            score = record.score,
            total = record.total,
            percent = record.percent,
            persisted,
            "session complete"
        );

        Ok(SessionOutcome {
            loaded,
            record,
            persisted,
        })
    }
}
