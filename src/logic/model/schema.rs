//! Feature schema and input preparation
//!
//! The schema comes from the model's metadata sidecar:
//!
//! ```json
//! { "feature_names": ["koi_period", "..."], "categorical_features": [] }
//! ```
//!
//! Preparation reindexes a row to `feature_names`, fills absent features with 0
//! and stringifies categorical ones. Without a schema rows pass through as-is.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::models::{FeatureRow, FeatureValue};

/// Value used for expected features the input does not carry
pub const MISSING_FEATURE_DEFAULT: f64 = 0.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureSchema {
    /// Ordered column list the model was trained on
    pub feature_names: Vec<String>,
    /// Subset of `feature_names` passed as strings
    #[serde(default)]
    pub categorical_features: Vec<String>,
}

impl FeatureSchema {
    pub fn new(feature_names: Vec<String>, categorical_features: Vec<String>) -> Result<Self, LoadError> {
        let schema = Self { feature_names, categorical_features };
        schema.validate()?;
        Ok(schema)
    }

    /// Read the sidecar. A missing file means the model carries no metadata.
    pub fn load(path: &Path) -> Result<Option<Self>, LoadError> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let schema: Self = serde_json::from_str(&raw)
            .map_err(|e| LoadError::Metadata(e.to_string()))?;
        schema.validate()?;

        Ok(Some(schema))
    }

    fn validate(&self) -> Result<(), LoadError> {
        let mut seen = HashSet::new();
        for name in &self.feature_names {
            if !seen.insert(name.as_str()) {
                return Err(LoadError::Metadata(format!("duplicate feature '{}'", name)));
            }
        }

        if let Some(unknown) = self
            .categorical_features
            .iter()
            .find(|name| !seen.contains(name.as_str()))
        {
            return Err(LoadError::Metadata(format!(
                "categorical feature '{}' is not an expected feature",
                unknown
            )));
        }

        Ok(())
    }

    pub fn is_categorical(&self, name: &str) -> bool {
        self.categorical_features.iter().any(|c| c == name)
    }
}

/// Reindex one row to the schema
pub fn prepare_row(row: &FeatureRow, schema: Option<&FeatureSchema>) -> FeatureRow {
    let Some(schema) = schema else {
        return row.clone();
    };

    schema
        .feature_names
        .iter()
        .map(|name| {
            let value = row
                .get(name)
                .cloned()
                .unwrap_or(FeatureValue::Number(MISSING_FEATURE_DEFAULT));

            let value = if schema.is_categorical(name) {
                value.into_text()
            } else {
                value
            };

            (name.clone(), value)
        })
        .collect()
}

pub fn prepare_rows(rows: &[FeatureRow], schema: Option<&FeatureSchema>) -> Vec<FeatureRow> {
    rows.iter().map(|row| prepare_row(row, schema)).collect()
}
