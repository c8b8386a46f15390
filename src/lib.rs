//! Stellar Signal API
//!
//! Lookup and live classification service behind the exoplanet dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    STELLAR SIGNAL API                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌─────────────────┐  ┌──────────────────┐  │
//! │  │  Router   │  │ Catalog         │  │ Live Predictor   │  │
//! │  │  (Axum)   │──│ Resolver        │  │ schema → model   │  │
//! │  └───────────┘  └────────┬────────┘  └────────┬─────────┘  │
//! │                          ▼                    ▼            │
//! │                 ┌─────────────────┐  ┌──────────────────┐  │
//! │                 │ results.csv     │  │ ONNX classifier  │  │
//! │                 └─────────────────┘  └──────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog and model are loaded once in `main` and shared read-only.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppError, AppResult};

use logic::{CatalogResolver, LivePredictor};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<CatalogResolver>,
    pub predictor: Arc<LivePredictor>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(resolver: CatalogResolver, predictor: LivePredictor, config: config::Config) -> Self {
        Self {
            resolver: Arc::new(resolver),
            predictor: Arc::new(predictor),
            config,
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // Service status
    let status_routes = Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::check));

    // Precomputed catalog
    let catalog_routes = Router::new()
        .route("/detect", post(handlers::planets::detect))
        .route("/planets/list", get(handlers::planets::list))
        .route("/stats", get(handlers::planets::stats));

    // Live model
    let model_routes = Router::new()
        .route("/predict", post(handlers::predict::predict))
        .route("/predict/batch", post(handlers::predict::predict_batch))
        .route("/model", get(handlers::predict::model_info));

    Router::new()
        .merge(status_routes)
        .merge(catalog_routes)
        .merge(model_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
