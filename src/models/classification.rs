//! Classification types
//!
//! Data structures only. Threshold policy lives in `logic::threshold`.

use serde::{Deserialize, Serialize};

/// Confidence bucket derived from the positive-class probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Predicted class. Index 1 of the model output is the positive class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictedLabel {
    #[serde(rename = "CANDIDATE")]
    Candidate,
    #[serde(rename = "FALSE POSITIVE")]
    FalsePositive,
}

impl PredictedLabel {
    pub const POSITIVE_INDEX: i64 = 1;
    pub const NEGATIVE_INDEX: i64 = 0;

    pub fn from_class_index(index: i64) -> Option<Self> {
        match index {
            Self::POSITIVE_INDEX => Some(PredictedLabel::Candidate),
            Self::NEGATIVE_INDEX => Some(PredictedLabel::FalsePositive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PredictedLabel::Candidate => "CANDIDATE",
            PredictedLabel::FalsePositive => "FALSE POSITIVE",
        }
    }
}

impl std::fmt::Display for PredictedLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Live prediction output, produced fresh per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: PredictedLabel,
    pub probability_candidate: f64,
    pub probability_false_positive: f64,
    pub confidence_level: ConfidenceLevel,
    pub is_confirmed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchPredictRequest {
    /// Rows with arbitrary columns; missing model features are filled later
    pub rows: Vec<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchPredictionResponse {
    pub results: Vec<ClassificationResult>,
    pub total: usize,
    pub confirmed_count: usize,
    pub false_positive_count: usize,
}

impl BatchPredictionResponse {
    pub fn from_results(results: Vec<ClassificationResult>) -> Self {
        let confirmed_count = results.iter().filter(|r| r.is_confirmed).count();
        Self {
            total: results.len(),
            false_positive_count: results.len() - confirmed_count,
            confirmed_count,
            results,
        }
    }
}
