//! Classifier capability
//!
//! Maps prepared feature rows to a class index and a two-way probability split.

use crate::models::FeatureRow;

/// Raw output for one row
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrediction {
    /// 1 = CANDIDATE, 0 = FALSE POSITIVE
    pub class_index: i64,
    /// Indexed by class
    pub probabilities: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("non-numeric value {value:?} in column '{column}'")]
    NonNumeric { column: String, value: String },
    #[error("row {row} does not match the batch columns")]
    ShapeMismatch { row: usize },
    #[error("empty batch")]
    EmptyBatch,
    #[error("unexpected model output: {0}")]
    Output(String),
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Trait for inference backends
pub trait Classifier: Send + Sync {
    /// Run the model once over the whole batch, one prediction per row
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<RawPrediction>, ClassifierError>;
}
