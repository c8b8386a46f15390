//! Live prediction handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use validator::Validate;

use crate::{AppResult, AppState};
use crate::logic::model::ModelInfo;
use crate::models::{
    BatchPredictRequest, BatchPredictionResponse, ClassificationResult, FeatureRecord, FeatureRow,
};

#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
    pub loaded: bool,
    #[serde(flatten)]
    pub info: ModelInfo,
}

/// Classify one set of transit/stellar parameters
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<FeatureRecord>, JsonRejection>,
) -> AppResult<Json<ClassificationResult>> {
    let Json(features) = payload?;
    features.validate()?;

    let result = state.predictor.predict(&features)?;
    Ok(Json(result))
}

/// Classify many rows at once; all-or-nothing
pub async fn predict_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchPredictRequest>, JsonRejection>,
) -> AppResult<Json<BatchPredictionResponse>> {
    let Json(req) = payload?;

    let rows = req.rows.iter().map(FeatureRow::from_json_map).collect();
    let response = state.predictor.predict_batch(rows)?;
    Ok(Json(response))
}

/// Loaded model metadata
pub async fn model_info(State(state): State<AppState>) -> AppResult<Json<ModelInfoResponse>> {
    let model = state.predictor.model()?;

    Ok(Json(ModelInfoResponse {
        loaded: true,
        info: model.info().clone(),
    }))
}
