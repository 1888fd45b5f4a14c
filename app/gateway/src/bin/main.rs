//! Gabble gateway binary entry point.
//!
//! Loads TOML configuration and the system preamble, constructs the
//! Gemini provider, and runs the axum server with graceful shutdown on
//! ctrl-c. A missing or empty preamble aborts startup.

use anyhow::Result;
use chat::PromptAssembler;
use gabble_gateway::{AppState, GatewayConfig, SessionStore, serve};
use llm::Gemini;
use std::{path::Path, sync::Arc, time::Duration};
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing from RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load configuration.
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "gabble.toml".to_string());
    let config = GatewayConfig::load(Path::new(&config_path))?;
    tracing::info!("loaded configuration from {config_path}");

    // Load the system preamble. Refuse to serve without one.
    let preamble = config.load_preamble()?;
    tracing::info!(
        "loaded system preamble from {} ({} bytes)",
        config.context.preamble_path,
        preamble.len()
    );

    // Construct the provider.
    let client = llm::Client::new();
    let provider = match &config.llm.base_url {
        Some(url) => Gemini::custom(client, &config.llm.api_key, url)?,
        None => Gemini::new(client, &config.llm.api_key)?,
    };
    tracing::info!("provider initialized for model {}", config.llm.model);

    // Build app state.
    let state = AppState {
        assembler: Arc::new(PromptAssembler::with_limit(
            preamble,
            config.context.max_length,
        )),
        sessions: Arc::new(SessionStore::new()),
        provider,
        model: config.llm.model.clone(),
    };

    // Bind and serve until ctrl-c.
    let handle = serve(
        state,
        &config.bind_address(),
        Duration::from_secs(config.session.ttl_secs),
    )
    .await?;

    signal::ctrl_c().await?;
    tracing::info!("received shutdown signal");
    handle.shutdown().await?;

    tracing::info!("gateway shut down");
    Ok(())
}
