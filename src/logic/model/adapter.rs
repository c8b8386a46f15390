//! Model adapter - classifier plus its declared feature metadata
//!
//! Built once at startup and never mutated afterwards.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::LoadError;
use super::classifier::Classifier;
use super::onnx::OnnxClassifier;
use super::schema::FeatureSchema;

/// Model metadata for the info endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub path: Option<String>,
    pub sha256: Option<String>,
    pub loaded_at: DateTime<Utc>,
    pub feature_names: Option<Vec<String>>,
    pub categorical_features: Vec<String>,
    /// No feature metadata: inputs reach the classifier unchanged
    pub degraded: bool,
}

#[derive(Clone)]
pub struct ModelAdapter {
    classifier: Arc<dyn Classifier>,
    schema: Option<FeatureSchema>,
    info: ModelInfo,
}

impl std::fmt::Debug for ModelAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelAdapter")
            .field("schema", &self.schema)
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

impl ModelAdapter {
    /// Wrap an already constructed classifier
    pub fn new(classifier: Arc<dyn Classifier>, schema: Option<FeatureSchema>) -> Self {
        let info = ModelInfo {
            path: None,
            sha256: None,
            loaded_at: Utc::now(),
            feature_names: schema.as_ref().map(|s| s.feature_names.clone()),
            categorical_features: schema
                .as_ref()
                .map(|s| s.categorical_features.clone())
                .unwrap_or_default(),
            degraded: schema.is_none(),
        };

        Self { classifier, schema, info }
    }

    /// Load the ONNX artifact and its optional metadata sidecar
    pub fn load(model_path: &Path, metadata_path: &Path) -> Result<Self, LoadError> {
        let model_bytes = std::fs::read(model_path).map_err(|source| LoadError::Io {
            path: model_path.display().to_string(),
            source,
        })?;

        let checksum = hex::encode(Sha256::digest(&model_bytes));
        let classifier = OnnxClassifier::from_bytes(&model_bytes)?;
        let schema = FeatureSchema::load(metadata_path)?;

        let mut adapter = Self::new(Arc::new(classifier), schema);
        adapter.info.path = Some(model_path.display().to_string());
        adapter.info.sha256 = Some(checksum);

        Ok(adapter)
    }

    /// Load the model, degrading to "not loaded" on any failure
    pub fn load_or_none(model_path: &Path, metadata_path: &Path) -> Option<Self> {
        match Self::load(model_path, metadata_path) {
            Ok(adapter) => {
                tracing::info!(
                    "Model loaded from {} (sha256 {})",
                    model_path.display(),
                    adapter.info.sha256.as_deref().unwrap_or("-")
                );
                if adapter.schema.is_none() {
                    tracing::warn!(
                        "No feature metadata at {}, inputs pass through unchanged",
                        metadata_path.display()
                    );
                }
                Some(adapter)
            }
            Err(e) => {
                tracing::warn!("Model unavailable: {}", e);
                None
            }
        }
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn schema(&self) -> Option<&FeatureSchema> {
        self.schema.as_ref()
    }

    pub fn info(&self) -> &ModelInfo {
        &self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::model::{ClassifierError, RawPrediction};
    use crate::models::FeatureRow;

    struct Constant;

    impl Classifier for Constant {
        fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<RawPrediction>, ClassifierError> {
            Ok(rows
                .iter()
                .map(|_| RawPrediction { class_index: 1, probabilities: vec![0.1, 0.9] })
                .collect())
        }
    }

    #[test]
    fn test_info_reflects_schema() {
        let schema = FeatureSchema::new(
            vec!["koi_period".to_string(), "flag".to_string()],
            vec!["flag".to_string()],
        )
        .unwrap();

        let adapter = ModelAdapter::new(Arc::new(Constant), Some(schema));
        let info = adapter.info();
        assert!(!info.degraded);
        assert_eq!(info.feature_names.as_ref().unwrap().len(), 2);
        assert_eq!(info.categorical_features, vec!["flag"]);
    }

    #[test]
    fn test_without_schema_is_degraded() {
        let adapter = ModelAdapter::new(Arc::new(Constant), None);
        assert!(adapter.info().degraded);
        assert!(adapter.schema().is_none());
    }

    #[test]
    fn test_missing_artifact_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelAdapter::load(
            &dir.path().join("model.onnx"),
            &dir.path().join("model.json"),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_missing_artifact_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = ModelAdapter::load_or_none(
            &dir.path().join("model.onnx"),
            &dir.path().join("model.json"),
        );
        assert!(adapter.is_none());
    }
}
