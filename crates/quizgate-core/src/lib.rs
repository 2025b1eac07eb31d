//! quizgate-core — Quiz model, scoring engine, and session orchestration.
//!
//! This crate defines the data model, trait seams, and session logic
//! that the rest of the quizgate system builds on.

pub mod error;
pub mod model;
pub mod parser;
pub mod scoring;
pub mod session;
pub mod traits;
pub mod transport;
