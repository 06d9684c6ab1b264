mod config;
mod errors;
mod export;
mod generation;
mod input;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::ExportCapability;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Penwright API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize generation client
    let client = GeminiClient::new(
        config.generation_api_key.clone(),
        config.generation_api_base.clone(),
    )?;
    if client.has_credential() {
        info!("Generation client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("No GEMINI_API_KEY / API_KEY set; generate requests will be refused");
    }

    // Export encoders load in the background; requests are refused until ready.
    let exports = ExportCapability::new();
    let warm = exports.clone();
    tokio::spawn(async move { warm.warm_up().await });

    let state = AppState::new(Arc::new(client), exports)
        .with_generation_timeout(config.generation_timeout_secs.map(Duration::from_secs));

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
