//! JSON question source loader.
//!
//! Loads an ordered question collection from a JSON file and validates it.
//! A malformed entry aborts the entire load; an empty array is a valid
//! zero-question collection.

use std::path::Path;

use serde::Deserialize;

use crate::error::QuizError;
use crate::model::Question;

/// Intermediate JSON structure for a single question entry.
///
/// Kept separate from [`Question`] so range validation happens in one place
/// instead of being implied by the serde derive.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    text: String,
    options: Vec<String>,
    correct: usize,
}

/// Load and validate a question collection from `path`.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, QuizError> {
    let content = std::fs::read_to_string(path).map_err(|source| QuizError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_questions_str(&content)
}

/// Parse a JSON string into a question collection (useful for testing).
pub fn parse_questions_str(content: &str) -> Result<Vec<Question>, QuizError> {
    let raw: Vec<RawQuestion> = serde_json::from_str(content)
        .map_err(|e| QuizError::MalformedData(e.to_string()))?;

    raw.into_iter()
        .enumerate()
        .map(|(i, q)| {
            if q.options.is_empty() {
                return Err(QuizError::MalformedData(format!(
                    "question {}: no options",
                    i + 1
                )));
            }
            if q.correct >= q.options.len() {
                return Err(QuizError::MalformedData(format!(
                    "question {}: correct index {} out of range for {} options",
                    i + 1,
                    q.correct,
                    q.options.len()
                )));
            }
            Ok(Question {
                text: q.text,
                options: q.options,
                correct: q.correct,
            })
        })
        .collect()
}
