//! rootly-alert - create a Rootly alert from workflow inputs.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rootly_alert::{
    run_action, ActionInputs, ActionOutput, Diagnostics, RootlyClient, TracingDiagnostics,
    WorkflowCommands, ALERT_ID_OUTPUT, API_BASE_URL,
};

/// Create a Rootly alert, resolving names to Rootly identifiers.
#[derive(Parser)]
#[command(name = "rootly-alert")]
#[command(about = "Create a Rootly alert from workflow inputs")]
struct Cli {
    /// Rootly API host (or set `ROOTLY_API_URL` env var).
    #[arg(long, env = "ROOTLY_API_URL", default_value = API_BASE_URL)]
    api_url: String,

    /// Enable verbose logging.
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    /// Set to "1" by the runner when step debugging is on.
    #[arg(long, env = "RUNNER_DEBUG", default_value = "", hide = true)]
    runner_debug: String,

    /// Set to "true" when running inside GitHub Actions.
    #[arg(long, env = "GITHUB_ACTIONS", default_value = "", hide = true)]
    github_actions: String,

    #[command(flatten)]
    inputs: ActionInputs,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging on stderr; stdout carries workflow commands
    let level = if cli.verbose || cli.runner_debug == "1" {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let diagnostics: Arc<dyn Diagnostics> = if cli.github_actions == "true" {
        Arc::new(WorkflowCommands)
    } else {
        Arc::new(TracingDiagnostics)
    };

    match create_alert(&cli, Arc::clone(&diagnostics)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            diagnostics.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn create_alert(cli: &Cli, diagnostics: Arc<dyn Diagnostics>) -> Result<()> {
    let client = RootlyClient::with_base_url(&cli.api_url, &cli.inputs.api_key, Arc::clone(&diagnostics))
        .context("Failed to create Rootly client")?;

    let alert_id = run_action(&client, &cli.inputs, diagnostics.as_ref()).await?;
    info!(alert_id = %alert_id, "Alert request finished");

    ActionOutput::from_env()
        .set(ALERT_ID_OUTPUT, &alert_id)
        .context("Failed to write alert-id output")?;

    Ok(())
}
