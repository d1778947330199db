mod ai;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ai::client::GeminiClient;
use crate::ai::defaults::FallbackCatalog;
use crate::ai::provider::Provider;
use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Rex API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    run_migrations(&db).await?;

    // Initialize the generation provider
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; AI content will be served from the static fallback tables");
    }
    let backend = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    let ai = Provider::new(
        backend,
        Duration::from_secs(config.generation_timeout_secs),
        config.generation_max_concurrent,
    );
    info!(
        "Generation provider initialized (model: {}, timeout: {}s, max concurrent: {})",
        ai::client::MODEL,
        config.generation_timeout_secs,
        config.generation_max_concurrent
    );

    // Fallback datasets: built once, read-only for the process lifetime
    let fallbacks = Arc::new(FallbackCatalog::new());

    // Build app state
    let state = AppState {
        db,
        ai,
        fallbacks,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
