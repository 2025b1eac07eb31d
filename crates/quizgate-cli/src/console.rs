//! Interactive terminal transport.

use std::io::{self, BufRead, Write};

use quizgate_core::model::{Question, ScoreRecord};
use quizgate_core::traits::QuizTransport;

/// Blocking stdin/stdout transport for interactive runs.
#[derive(Default)]
pub struct ConsoleTransport;

impl ConsoleTransport {
    pub fn new() -> Self {
        Self
    }
}

impl QuizTransport for ConsoleTransport {
    fn present_question(&mut self, number: usize, question: &Question) {
        println!("\nQuestion {number}: {}", question.text);
        for (i, option) in question.options.iter().enumerate() {
            println!("{}) {option}", i + 1);
        }
        print!("Your answer: ");
        let _ = io::stdout().flush();
    }

    fn read_answer(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line)
    }

    fn reject_answer(&mut self, max: usize) {
        print!("Enter a number between 1 and {max}: ");
        let _ = io::stdout().flush();
    }

    fn report_loaded(&mut self, count: usize) {
        println!("Loaded questions: {count}");
    }

    fn report_outcome(&mut self, record: &ScoreRecord) {
        println!("\nYour score: {} out of {}", record.score, record.total);
        println!("Percent: {}%", record.percent);
    }
}
