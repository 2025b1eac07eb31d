//! Core data model types for quizgate.
//!
//! These are the value types the whole system passes around: questions as
//! loaded from a question source, and the score record that gets persisted.

use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// Constructed once at load time and never mutated afterwards. The parser
/// guarantees `correct < options.len()` and `!options.is_empty()` for every
/// question it hands out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to the user.
    pub text: String,
    /// Answer options, presented enumerated 1..N.
    pub options: Vec<String>,
    /// 0-based index of the correct option.
    pub correct: usize,
}

/// The outcome of a completed quiz run.
///
/// Written as one atomic record; `percent` is derived, never stored
/// independently of `score` and `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Number of correctly answered questions.
    pub score: u32,
    /// Number of questions in the run.
    pub total: u32,
    /// `floor(score * 100 / total)`, or 0 for a zero-question run.
    pub percent: u32,
}

impl ScoreRecord {
    /// Build a record from a raw score and question count.
    ///
    /// A zero-question run is valid and yields `percent = 0` rather than a
    /// division fault.
    pub fn new(score: u32, total: u32) -> Self {
        let percent = if total == 0 {
            0
        } else {
            score * 100 / total
        };
        Self {
            score,
            total,
            percent,
        }
    }
}
