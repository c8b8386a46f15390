//! Feature model - live prediction inputs
//!
//! `FEATURE_LAYOUT` is the canonical ordering of the eleven KOI-style fields.
//! A loaded model may declare its own ordering; the predictor reindexes to it.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Canonical feature names, in `FeatureRecord` field order
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Transit ===
    "koi_period",    // orbital period (days)
    "koi_time0bk",   // transit epoch (BKJD)
    "koi_impact",    // impact parameter
    "koi_duration",  // transit duration (hours)
    "koi_depth",     // transit depth (ppm)
    "koi_prad",      // planet radius (Earth radii)
    "koi_model_snr", // signal-to-noise ratio

    // === Stellar ===
    "koi_steff",     // effective temperature (K)
    "koi_slogg",     // surface gravity (log g)
    "koi_srad",      // stellar radius (Solar radii)
    "koi_kepmag",    // Kepler magnitude
];

/// Eleven-field prediction request. All fields required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FeatureRecord {
    #[validate(custom(function = "validate_finite"))]
    pub koi_period: f64,
    #[validate(custom(function = "validate_finite"))]
    pub koi_time0bk: f64,
    #[validate(custom(function = "validate_finite"))]
    pub koi_impact: f64,
    #[validate(custom(function = "validate_finite"))]
    pub koi_duration: f64,
    #[validate(custom(function = "validate_finite"))]
    pub koi_depth: f64,
    #[validate(custom(function = "validate_finite"))]
    pub koi_prad: f64,
    #[validate(custom(function = "validate_finite"))]
    pub koi_model_snr: f64,
    #[validate(custom(function = "validate_finite"))]
    pub koi_steff: f64,
    #[validate(custom(function = "validate_finite"))]
    pub koi_slogg: f64,
    #[validate(custom(function = "validate_finite"))]
    pub koi_srad: f64,
    #[validate(custom(function = "validate_finite"))]
    pub koi_kepmag: f64,
}

fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("not_finite"))
    }
}

impl FeatureRecord {
    fn values(&self) -> [f64; 11] {
        [
            self.koi_period,
            self.koi_time0bk,
            self.koi_impact,
            self.koi_duration,
            self.koi_depth,
            self.koi_prad,
            self.koi_model_snr,
            self.koi_steff,
            self.koi_slogg,
            self.koi_srad,
            self.koi_kepmag,
        ]
    }

    /// Convert to a named row in `FEATURE_LAYOUT` order
    pub fn to_row(&self) -> FeatureRow {
        FEATURE_LAYOUT
            .iter()
            .zip(self.values())
            .map(|(name, value)| (name.to_string(), FeatureValue::Number(value)))
            .collect()
    }
}

// ============================================================================
// FEATURE VALUES
// ============================================================================

/// A single cell of a feature row
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Number(f64),
    Text(String),
    Missing,
}

impl FeatureValue {
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => FeatureValue::Missing,
            Value::Bool(b) => FeatureValue::Number(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => n
                .as_f64()
                .map(FeatureValue::Number)
                .unwrap_or_else(|| FeatureValue::Text(n.to_string())),
            Value::String(s) => FeatureValue::Text(s.clone()),
            other => FeatureValue::Text(other.to_string()),
        }
    }

    /// String form used for categorical features
    pub fn into_text(self) -> Self {
        match self {
            FeatureValue::Number(n) => FeatureValue::Text(n.to_string()),
            other => other,
        }
    }
}

/// Ordered, named feature values for one row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureRow {
    columns: Vec<(String, FeatureValue)>,
}

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from a JSON object, keeping the object's key order
    pub fn from_json_map(map: &serde_json::Map<String, serde_json::Value>) -> Self {
        map.iter()
            .map(|(name, value)| (name.clone(), FeatureValue::from_json(value)))
            .collect()
    }

    /// First value stored under `name`
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &FeatureValue> {
        self.columns.iter().map(|(_, value)| value)
    }

    pub(crate) fn len(&self) -> usize {
        self.columns.len()
    }
}

impl FromIterator<(String, FeatureValue)> for FeatureRow {
    fn from_iter<I: IntoIterator<Item = (String, FeatureValue)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
