//! Claim Intake - Command Line Binary
//!
//! Runs one claim through intake and prints the verdict as JSON on stdout.
//! Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! claim-intake "I was in a car accident last week" \
//!     --name "John Doe" --date 2025-08-10 \
//!     --document license.txt --document police_report.txt
//! ```
//!
//! # Environment Variables
//!
//! * `CLAIMS_LOG_LEVEL` - Log level (default: warn); `RUST_LOG` takes precedence
//! * `CLAIMS_MAX_ITERATIONS` - Document requests before escalation (default: 10)
//! * `CLAIMS_CLASSIFIER_TIMEOUT_MS` - Classifier timeout (default: 30000)
//! * `CLAIMS_EXTRACTOR_TIMEOUT_MS` - Document read timeout (default: 30000)
//! * `CLAIMS_MAX_DOCUMENT_BYTES` - Largest readable document (default: 10 MiB)

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::{build_service, config::CliConfig, dto::ClaimResponse, submission};

#[derive(Parser, Debug)]
#[command(name = "claim-intake", about = "Run an insurance claim through intake")]
struct Args {
    /// Free-text description of the claim
    input: String,

    /// Claimant name, if known
    #[arg(long)]
    name: Option<String>,

    /// Incident date, if known
    #[arg(long)]
    date: Option<String>,

    /// Uploaded document (repeatable); plain-text files are read
    #[arg(short, long = "document")]
    documents: Vec<PathBuf>,

    /// Overrides CLAIMS_MAX_ITERATIONS
    #[arg(long)]
    max_iterations: Option<u32>,

    /// Pretty-print the JSON verdict
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let (config, config_error) = match CliConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (CliConfig::default(), Some(e)),
    };
    let config = config.with_max_iterations(args.max_iterations);

    init_tracing(&config.log_level);
    if let Some(error) = config_error {
        tracing::warn!(%error, "Invalid CLAIMS_* configuration, using defaults");
    }

    let service = build_service(&config).context("invalid workflow configuration")?;
    let record = service
        .process_claim(submission(&args.input, args.name, args.date, &args.documents))
        .await;

    let response = ClaimResponse::from(&record);
    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);
    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
