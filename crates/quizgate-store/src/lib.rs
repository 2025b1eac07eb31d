//! quizgate-store — Result persistence.
//!
//! Writes the completed score record as JSON. The store follows the
//! overwrite-latest policy: each save replaces whatever the destination
//! held before (last-write-wins, no merge, no history).

mod json;

pub use json::JsonResultStore;
