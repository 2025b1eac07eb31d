//! quizgate CLI — the user-facing quiz runner.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use quizgate_auth::{load_config_from, AllowAllGate, HttpAccessGate};
use quizgate_core::error::QuizError;
use quizgate_core::session::TestSession;
use quizgate_core::traits::AccessGate;
use quizgate_store::JsonResultStore;

mod console;

use console::ConsoleTransport;

#[derive(Parser)]
#[command(name = "quizgate", version, about = "Permission-gated multiple-choice quiz runner")]
struct Cli {
    /// Path to the question source JSON file
    questions: Option<PathBuf>,

    /// Authorization code exchanged for an access token
    #[arg(default_value = "TEST_CODE")]
    code: String,

    /// Result destination (overrides config)
    #[arg(long)]
    results: Option<PathBuf>,

    /// Authorization service base URL (overrides config)
    #[arg(long)]
    auth_url: Option<String>,

    /// Run without the authorization gate
    #[arg(long)]
    no_auth: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config_from(cli.config.as_deref())?;

    let questions = cli.questions.unwrap_or_else(|| config.questions_path.clone());
    let results = cli.results.unwrap_or_else(|| config.results_path.clone());
    let auth_url = cli
        .auth_url
        .unwrap_or_else(|| config.auth_base_url.clone());

    let gate: Arc<dyn AccessGate> = if cli.no_auth || !config.require_auth {
        Arc::new(AllowAllGate)
    } else {
        Arc::new(HttpAccessGate::new(
            &auth_url,
            Duration::from_secs(config.auth_timeout_secs),
        ))
    };

    let sink = Arc::new(JsonResultStore::new(results));
    let session = TestSession::new(gate, sink);
    let mut transport = ConsoleTransport::new();

    session
        .start_test(&questions, &cli.code, &mut transport)
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizgate=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<QuizError>() {
            Some(QuizError::TokenExchangeFailed) => {
                println!("Could not obtain an access token");
            }
            Some(QuizError::PermissionDenied(_)) => {
                println!("You do not have permission to start the test");
            }
            _ => eprintln!("Error: {e:#}"),
        }
        process::exit(1);
    }
}
