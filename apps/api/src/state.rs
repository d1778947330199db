use std::sync::Arc;

use sqlx::PgPool;

use crate::ai::defaults::FallbackCatalog;
use crate::ai::provider::Provider;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Fallback-guarded generation provider behind the three AI routes.
    pub ai: Provider,
    /// Static fallback datasets, built at startup and read-only thereafter.
    pub fallbacks: Arc<FallbackCatalog>,
    pub config: Config,
}
