//! TSA Item Checker
//!
//! Answers whether an item may travel in carry-on or checked baggage by
//! asking a hosted LLM and reshaping its reply into a fixed schema.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod config;
mod domain;
mod engine;
mod error;
mod logging;

use crate::api::build_router;
use crate::config::Config;
use crate::engine::{BaggageAdvisor, OpenRouterAdvisor, OpenRouterConfig};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream advisor that judges items.
    pub advisor: Arc<dyn BaggageAdvisor>,
    /// Longest accepted item name, in characters.
    pub max_item_chars: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    logging::init();

    tracing::info!("Starting TSA Item Checker v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.llm.model,
        timeout_secs = config.llm.timeout_secs,
        "Configuration loaded"
    );

    if !config.llm.is_configured() {
        tracing::warn!("OPENROUTER_API_KEY not set - item checks will fail until it is configured");
    }

    let advisor = OpenRouterAdvisor::new(OpenRouterConfig::from(&config.llm))
        .map_err(|e| anyhow::anyhow!("Advisor initialization error: {}", e))?;

    let state = AppState {
        advisor: Arc::new(advisor),
        max_item_chars: config.limits.max_item_chars,
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("API docs available at http://{}/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
