//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
    status: &'static str,
    total_planets: usize,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    data_loaded: bool,
    model_loaded: bool,
    records: usize,
}

pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Stellar Signal API",
        status: "online",
        total_planets: state.resolver.record_count(),
    })
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        data_loaded: state.resolver.is_loaded(),
        model_loaded: state.predictor.is_loaded(),
        records: state.resolver.record_count(),
    })
}
