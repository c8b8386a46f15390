//! Catalog handlers

use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Query, State},
    Json,
};
use validator::Validate;

use crate::{AppResult, AppState};
use crate::models::{CatalogStatistics, ListQuery, PlanetPage, PlanetQuery, PlanetResult};

/// Detect planet by ID or name
pub async fn detect(
    State(state): State<AppState>,
    payload: Result<Json<PlanetQuery>, JsonRejection>,
) -> AppResult<Json<PlanetResult>> {
    let Json(req) = payload?;
    req.validate()?;

    let result = state.resolver.detect(&req.query)?;
    Ok(Json(result))
}

/// List catalog entries with pagination
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Json<PlanetPage>> {
    let Query(query) = query?;
    let limit = query
        .limit
        .unwrap_or(state.config.list_default_limit)
        .min(state.config.list_max_limit);
    let offset = query.offset.unwrap_or(0);

    let page = state.resolver.list(offset, limit)?;
    Ok(Json(page))
}

/// Catalog statistics
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<CatalogStatistics>> {
    let stats = state.resolver.statistics()?;
    Ok(Json(stats))
}
