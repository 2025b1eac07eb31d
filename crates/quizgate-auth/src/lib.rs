//! quizgate-auth — Access gates for the quizgate session.
//!
//! Implements the `AccessGate` trait against the external authorization
//! service over HTTP, plus the allow-all gate for auth-disabled runs and a
//! static gate for wiring tests. Also owns configuration loading.

pub mod config;
pub mod error;
pub mod gates;
pub mod http;

pub use config::{load_config_from, QuizgateConfig};
pub use error::AuthError;
pub use gates::{AllowAllGate, StaticGate};
pub use http::HttpAccessGate;
