//! Stellar Signal API server

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stellar_signal::config::Config;
use stellar_signal::logic::model::ModelAdapter;
use stellar_signal::logic::{CatalogResolver, LivePredictor};
use stellar_signal::models::Catalog;
use stellar_signal::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stellar_signal=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Stellar Signal API starting...");

    // Startup phase: load once, never mutated afterwards
    let catalog = Catalog::load_or_empty(&config.catalog_path);
    let model = ModelAdapter::load_or_none(&config.model_path, &config.model_metadata_path);

    let state = AppState::new(
        CatalogResolver::new(catalog),
        LivePredictor::new(model),
        config.clone(),
    );

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
