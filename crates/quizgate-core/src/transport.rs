//! Scripted transport for non-interactive callers and tests.
//!
//! Feeds the scoring engine from a queue of pre-collected answers and
//! records everything the engine reported, so a request/response caller can
//! drive the same core logic as an interactive terminal.

use std::collections::VecDeque;
use std::io;

use crate::model::{Question, ScoreRecord};
use crate::traits::QuizTransport;

/// A [`QuizTransport`] backed by a queue of answers.
///
/// Reading past the end of the queue yields an `UnexpectedEof` error, which
/// the scoring engine surfaces as a session failure — the unbounded
/// re-prompt loop never spins on an exhausted script.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    answers: VecDeque<String>,
    presented: Vec<String>,
    rejections: u32,
    loaded: Option<usize>,
    outcome: Option<ScoreRecord>,
}

impl ScriptedTransport {
    /// Create a transport with an empty answer queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport pre-loaded with the given answers.
    pub fn with_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Push one more answer onto the queue.
    pub fn push_answer(&mut self, answer: &str) {
        self.answers.push_back(answer.to_string());
    }

    /// Texts of the questions presented so far, in order.
    pub fn presented(&self) -> &[String] {
        &self.presented
    }

    /// How many answers were rejected as invalid.
    pub fn rejections(&self) -> u32 {
        self.rejections
    }

    /// The loaded-question count reported to this transport, if any.
    pub fn loaded(&self) -> Option<usize> {
        self.loaded
    }

    /// The final outcome reported to this transport, if the run finished.
    pub fn outcome(&self) -> Option<&ScoreRecord> {
        self.outcome.as_ref()
    }
}

impl QuizTransport for ScriptedTransport {
    fn present_question(&mut self, _number: usize, question: &Question) {
        self.presented.push(question.text.clone());
    }

    fn read_answer(&mut self) -> io::Result<String> {
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "answer script exhausted")
        })
    }

    fn reject_answer(&mut self, _max: usize) {
        self.rejections += 1;
    }

    fn report_loaded(&mut self, count: usize) {
        self.loaded = Some(count);
    }

    fn report_outcome(&mut self, record: &ScoreRecord) {
        self.outcome = Some(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_come_back_in_order() {
        let mut transport = ScriptedTransport::with_answers(["1", "2"]);
        transport.push_answer("3");
        assert_eq!(transport.read_answer().unwrap(), "1");
        assert_eq!(transport.read_answer().unwrap(), "2");
        assert_eq!(transport.read_answer().unwrap(), "3");
    }

    #[test]
    fn exhausted_queue_is_eof() {
        let mut transport = ScriptedTransport::new();
        let err = transport.read_answer().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn records_reported_events() {
        let mut transport = ScriptedTransport::new();
        transport.report_loaded(3);
        transport.report_outcome(&ScoreRecord::new(2, 3));
        assert_eq!(transport.loaded(), Some(3));
        assert_eq!(transport.outcome().unwrap().percent, 66);
    }
}
