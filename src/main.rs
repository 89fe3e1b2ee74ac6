// =============================================================================
// Stock Stats — Main Entry Point
// =============================================================================
//
// Proxies a stock price-history provider and serves average-price and
// price-correlation statistics over HTTP. Stateless: every request fetches
// fresh data from upstream.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod api;
mod app_state;
mod config;
mod statistics;
mod types;
mod upstream;

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::config::ServiceConfig;
use crate::statistics::StatisticsEngine;
use crate::upstream::StockApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env();
    info!(
        bind_addr = %config.bind_addr,
        upstream = %config.upstream_base_url,
        "Stock stats service starting"
    );

    // ── 2. Dependencies ──────────────────────────────────────────────────
    let client = StockApiClient::new(&config.upstream_base_url)
        .context("failed to build upstream client")?;
    let state = Arc::new(AppState::new(Arc::new(client), StatisticsEngine::new()));

    // ── 3. API server ────────────────────────────────────────────────────
    let app = api::rest::router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind API server on {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server failed")?;

    info!("Stock stats service shut down complete.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    warn!("Shutdown signal received — stopping gracefully");
}
