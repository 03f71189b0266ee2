//! CLI entry point - the composition root.
//!
//! Loads `.env`, sets up logging, validates the credential, then hands a
//! bootstrapped context to the Axum server. A missing credential ends the
//! process before any socket is bound.

use clap::Parser;
use tracing::error;

use codex_cli::{Cli, logging};
use codex_core::RelayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables (real env wins over .env)
    dotenvy::dotenv().ok();

    // Parse CLI arguments (flags fall back to the environment loaded above)
    let cli = Cli::parse();

    let guard = logging::init_tracing(&cli.log_file)?;

    let relay = match RelayConfig::from_env() {
        Ok(relay) => relay,
        Err(e) => {
            error!("{e}");
            // process::exit skips destructors; flush the file writer first
            drop(guard);
            std::process::exit(1);
        }
    };

    let ctx = codex_axum::bootstrap(&relay, cli.openai_config())?;
    let result = codex_axum::start_server(cli.server_config(), ctx).await;

    if let Err(e) = &result {
        error!(error = %e, "Server terminated with an error");
    }
    drop(guard);
    result
}
