//! Live Predictor
//!
//! Prepares inputs against the model's declared schema, invokes the classifier
//! once per request and derives label, confidence and confirmation.

use crate::{AppError, AppResult};
use crate::logic::model::{prepare_rows, ClassifierError, ModelAdapter, RawPrediction};
use crate::logic::threshold::{confidence_level, is_confirmed};
use crate::models::{
    BatchPredictionResponse, ClassificationResult, FeatureRecord, FeatureRow, PredictedLabel,
};

#[derive(Debug, Clone, Default)]
pub struct LivePredictor {
    model: Option<ModelAdapter>,
}

impl LivePredictor {
    pub fn new(model: Option<ModelAdapter>) -> Self {
        Self { model }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> AppResult<&ModelAdapter> {
        self.model.as_ref().ok_or(AppError::ModelUnavailable)
    }

    /// Classify one eleven-field record
    pub fn predict(&self, features: &FeatureRecord) -> AppResult<ClassificationResult> {
        let mut results = self.classify_rows(vec![features.to_row()])?;
        results
            .pop()
            .ok_or_else(|| AppError::PredictionError("classifier returned no rows".to_string()))
    }

    /// Classify a whole batch in one invocation. Any failure fails every row.
    pub fn predict_batch(&self, rows: Vec<FeatureRow>) -> AppResult<BatchPredictionResponse> {
        self.model()?;
        if rows.is_empty() {
            return Err(AppError::ValidationError("batch contains no rows".to_string()));
        }

        let results = self.classify_rows(rows)?;
        let response = BatchPredictionResponse::from_results(results);

        tracing::info!(
            "Batch of {} classified: {} confirmed, {} false positive",
            response.total,
            response.confirmed_count,
            response.false_positive_count
        );

        Ok(response)
    }

    fn classify_rows(&self, rows: Vec<FeatureRow>) -> AppResult<Vec<ClassificationResult>> {
        let model = self.model()?;

        let prepared = prepare_rows(&rows, model.schema());
        let raw = model.classifier().predict(&prepared)?;

        if raw.len() != prepared.len() {
            return Err(ClassifierError::Output(format!(
                "expected {} predictions, got {}",
                prepared.len(),
                raw.len()
            ))
            .into());
        }

        raw.into_iter()
            .map(|prediction| to_result(prediction).map_err(AppError::from))
            .collect()
    }
}

fn to_result(raw: RawPrediction) -> Result<ClassificationResult, ClassifierError> {
    let label = PredictedLabel::from_class_index(raw.class_index).ok_or_else(|| {
        ClassifierError::Output(format!("unknown class index {}", raw.class_index))
    })?;

    let [negative, positive] = <[f64; 2]>::try_from(raw.probabilities.as_slice()).map_err(|_| {
        ClassifierError::Output(format!(
            "expected 2 class probabilities, got {}",
            raw.probabilities.len()
        ))
    })?;

    Ok(ClassificationResult {
        label,
        probability_candidate: positive,
        probability_false_positive: negative,
        confidence_level: confidence_level(positive),
        is_confirmed: is_confirmed(positive),
    })
}
