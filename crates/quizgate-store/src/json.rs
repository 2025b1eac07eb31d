//! JSON file result store.

use std::path::PathBuf;

use quizgate_core::error::QuizError;
use quizgate_core::model::ScoreRecord;
use quizgate_core::traits::ResultSink;

/// Stores the score record as a single pretty-printed JSON object.
///
/// The destination path is explicit configuration, not a process-wide
/// constant; each save truncates and rewrites the whole file.
pub struct JsonResultStore {
    destination: PathBuf,
}

impl JsonResultStore {
    pub fn new(destination: PathBuf) -> Self {
        Self { destination }
    }
}

impl ResultSink for JsonResultStore {
    fn save(&self, record: &ScoreRecord) -> Result<(), QuizError> {
        // serde_json on a struct of three integers cannot fail; io can.
        let body = serde_json::to_string_pretty(record)
            .map_err(|e| QuizError::MalformedData(e.to_string()))?;

        std::fs::write(&self.destination, body).map_err(|source| {
            QuizError::DestinationUnavailable {
                path: self.destination.clone(),
                source,
            }
        })?;

        tracing::debug!(path = %self.destination.display(), "result saved");
        Ok(())
    }
}
