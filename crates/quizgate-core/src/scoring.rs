//! The scoring engine: presents questions, validates answers, counts points.
//!
//! Scoring is pure relative to the question sequence and the transport's
//! answer stream; nothing here touches the network or the filesystem.

use crate::error::QuizError;
use crate::model::Question;
use crate::traits::QuizTransport;

/// Run every question in order and return the number answered correctly.
///
/// Answers are 1-based as presented to the user; `answer - 1 == correct`
/// scores exactly one point, with no partial credit. Question order is
/// fixed as given. An empty sequence returns 0 without presenting anything.
pub fn run_quiz(
    questions: &[Question],
    transport: &mut dyn QuizTransport,
) -> Result<u32, QuizError> {
    let mut score = 0;

    for (i, question) in questions.iter().enumerate() {
        transport.present_question(i + 1, question);
        let answer = read_valid_answer(transport, question.options.len())?;
        if answer - 1 == question.correct {
            score += 1;
        }
    }

    Ok(score)
}

/// Re-prompt until the transport yields an integer in `1..=max`.
///
/// Invalid input never counts as an answer and never ends the session; the
/// loop has no retry bound. Only a transport read failure (e.g. the answer
/// stream closing) gets out of here as an error.
fn read_valid_answer(transport: &mut dyn QuizTransport, max: usize) -> Result<usize, QuizError> {
    loop {
        let line = transport.read_answer()?;
        match line.trim().parse::<usize>() {
            Ok(value) if (1..=max).contains(&value) => return Ok(value),
            _ => transport.reject_answer(max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ScriptedTransport;

    fn three_questions() -> Vec<Question> {
        // Correct indices [1, 1, 0] — the fixture from the scoring contract.
        vec![
            Question {
                text: "q1".into(),
                options: vec!["a".into(), "b".into()],
                correct: 1,
            },
            Question {
                text: "q2".into(),
                options: vec!["a".into(), "b".into(), "c".into()],
                correct: 1,
            },
            Question {
                text: "q3".into(),
                options: vec!["a".into(), "b".into()],
                correct: 0,
            },
        ]
    }

    #[test]
    fn all_correct_answers_score_full() {
        let questions = three_questions();
        let mut transport = ScriptedTransport::with_answers(["2", "2", "1"]);
        let score = run_quiz(&questions, &mut transport).unwrap();
        assert_eq!(score, 3);
    }

    #[test]
    fn mixed_answers_follow_offset_rule() {
        // [1, 2, 1]: q1 wrong (correct is 2), q2 right, q3 wrong (correct is 1).
        let questions = three_questions();
        let mut transport = ScriptedTransport::with_answers(["1", "2", "1"]);
        let score = run_quiz(&questions, &mut transport).unwrap();
        assert_eq!(score, 2);
    }

    #[test]
    fn wrong_in_range_answers_score_nothing() {
        let questions = three_questions();
        let mut transport = ScriptedTransport::with_answers(["1", "1", "2"]);
        let score = run_quiz(&questions, &mut transport).unwrap();
        assert_eq!(score, 0);
    }

    #[test]
    fn invalid_input_reprompts_without_scoring() {
        let questions = three_questions();
        // "0", "9", and "x" are each rejected before a valid answer lands.
        let mut transport =
            ScriptedTransport::with_answers(["0", "9", "x", "2", "2", "1"]);
        let score = run_quiz(&questions, &mut transport).unwrap();
        assert_eq!(score, 3);
        assert_eq!(transport.rejections(), 3);
    }

    #[test]
    fn out_of_range_respects_per_question_option_count() {
        // "3" is out of range for a 2-option question but fine for 3 options.
        let questions = three_questions();
        let mut transport =
            ScriptedTransport::with_answers(["3", "2", "3", "1"]);
        let score = run_quiz(&questions, &mut transport).unwrap();
        // q1: "3" rejected, "2" right; q2: "3" accepted but wrong; q3: "1" right.
        assert_eq!(score, 2);
        assert_eq!(transport.rejections(), 1);
    }

    #[test]
    fn whitespace_around_answers_is_tolerated() {
        let questions = three_questions();
        let mut transport =
            ScriptedTransport::with_answers([" 2 ", "2\n", "1"]);
        let score = run_quiz(&questions, &mut transport).unwrap();
        assert_eq!(score, 3);
    }

    #[test]
    fn empty_question_list_scores_zero() {
        let mut transport = ScriptedTransport::new();
        let score = run_quiz(&[], &mut transport).unwrap();
        assert_eq!(score, 0);
        assert!(transport.presented().is_empty());
    }

    #[test]
    fn exhausted_answer_stream_is_an_error() {
        let questions = three_questions();
        let mut transport = ScriptedTransport::with_answers(["2"]);
        let err = run_quiz(&questions, &mut transport).unwrap_err();
        assert!(matches!(err, QuizError::AnswerRead(_)));
    }

    #[test]
    fn score_stays_within_question_count() {
        let questions = three_questions();
        let mut transport = ScriptedTransport::with_answers(["2", "3", "2"]);
        let score = run_quiz(&questions, &mut transport).unwrap();
        assert!(score <= questions.len() as u32);
    }
}
