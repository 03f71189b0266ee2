//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the concrete completion client is
//! instantiated for the web adapter. Handlers see a `dyn CompletionPort`.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use codex_core::{
    CompletionParams, CompletionPort, DEFAULT_ALLOWED_ORIGIN, DEFAULT_PORT, RelayConfig,
};
use codex_openai::{OpenAiClient, OpenAiClientConfig};
use tokio::net::TcpListener;
use tracing::info;

/// CORS configuration for the primary policy.
///
/// The wildcard headers added to every non-preflight response are not
/// configurable.
#[derive(Debug, Clone)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// Build from a list of origins. A `*` entry allows every origin.
    pub fn from_origins(origins: Vec<String>) -> Self {
        if origins.iter().any(|o| o.trim() == "*") {
            Self::AllowAll
        } else {
            Self::AllowOrigins(origins)
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::AllowOrigins(vec![DEFAULT_ALLOWED_ORIGIN.to_string()])
    }
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with the default port and allowed origin.
    pub fn with_defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors: CorsConfig::default(),
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set CORS to allow specific origins (`*` allows all).
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::from_origins(origins);
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Upstream completion provider.
    pub completions: Arc<dyn CompletionPort>,
    /// Sampling parameters sent with every prompt.
    pub params: CompletionParams,
}

impl AxumContext {
    /// Context using the relay's fixed sampling parameters.
    pub fn new(completions: Arc<dyn CompletionPort>) -> Self {
        Self {
            completions,
            params: CompletionParams::relay_defaults(),
        }
    }
}

/// Build the context with a real OpenAI client.
pub fn bootstrap(relay: &RelayConfig, openai: OpenAiClientConfig) -> Result<AxumContext> {
    let client = OpenAiClient::new(openai, relay.api_key())?;

    info!(
        target: "codex.bootstrap",
        completions_url = %client.completions_url(),
        model = CompletionParams::MODEL,
        "Completion client ready"
    );

    Ok(AxumContext::new(Arc::new(client)))
}

/// Serve the router on a pre-bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    ctx: AxumContext,
    cors: &CorsConfig,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = crate::routes::create_router(ctx, cors);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

/// Start the web server on the configured port.
///
/// Runs until Ctrl-C.
pub async fn start_server(config: ServerConfig, ctx: AxumContext) -> Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = TcpListener::bind(addr).await?;

    info!(
        "Server listening on port http://localhost:{}",
        listener.local_addr()?.port()
    );

    serve(listener, ctx, &config.cors, shutdown_signal()).await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
