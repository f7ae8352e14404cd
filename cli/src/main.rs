//! CLI for the crash issue reporter.
//!
//! Runs first-run setup if `config.json` is incomplete, then triggers a sample
//! failure and files it as a GitHub issue.

use clap::Parser;
use crash_issue_reporter::{
    FiledIssue, IssueStatus, Runner, RunnerConfig, RunnerError, DEFAULT_CONFIG_FILE,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crash Issue Reporter - File application failures as deduplicated GitHub issues.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    install_crypto_provider();

    let args = Args::parse();

    match run(args).await {
        Ok(Some(filed)) => {
            print_summary(&filed);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Setup failed");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with `RUST_LOG` support, defaulting to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Installs aws-lc-rs as the process-wide rustls crypto provider.
fn install_crypto_provider() {
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        debug!("A rustls crypto provider was already installed");
    }
}

async fn run(args: Args) -> Result<Option<FiledIssue>, RunnerError> {
    let config = RunnerConfig::new(args.config, env!("CARGO_PKG_VERSION"));
    Runner::new(config).run().await
}

/// Prints the outcome of the self-test report.
fn print_summary(filed: &FiledIssue) {
    println!("\nSummary:");
    println!("  Repository: {}", filed.repository);
    println!("  Title: {}", filed.title);
    println!("  Fingerprint: {}", filed.fingerprint);
    println!("  Status: {}", filed.status.as_str());

    match &filed.status {
        IssueStatus::Created { number, url } => println!("  Issue: #{number} {url}"),
        IssueStatus::Duplicate { url } => println!("  Existing issue: {url}"),
        IssueStatus::Failed { error } => println!("  Error: {error}"),
    }
}
