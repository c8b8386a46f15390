//! Catalog model - precomputed classification table

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::LoadError;
use crate::models::ConfidenceLevel;

/// One precomputed catalog row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: i64,
    pub name: String,
    /// Informational label; may disagree with `probability_confirmed`
    pub predicted_disposition: String,
    pub probability_confirmed: f64,
}

/// In-memory, read-only catalog table in load order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }

    /// Load the catalog from a CSV file with a header row.
    /// Columns other than the four catalog fields are ignored.
    pub fn load_csv(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let mut records = Vec::new();

        for (idx, result) in reader.deserialize::<CatalogRecord>().enumerate() {
            let row = idx + 1;
            let record = result.map_err(|e| LoadError::Catalog {
                row,
                message: e.to_string(),
            })?;

            if !(0.0..=1.0).contains(&record.probability_confirmed) {
                return Err(LoadError::Catalog {
                    row,
                    message: format!(
                        "probability_confirmed {} outside [0, 1]",
                        record.probability_confirmed
                    ),
                });
            }

            records.push(record);
        }

        Ok(Self { records })
    }

    /// Load the catalog, degrading to an empty table on any failure
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load_csv(path) {
            Ok(catalog) => {
                tracing::info!("Loaded {} records from {}", catalog.len(), path.display());
                catalog
            }
            Err(e) => {
                tracing::warn!("Catalog unavailable: {}", e);
                Self::default()
            }
        }
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// REQUEST / RESPONSE SHAPES
// ============================================================================

#[derive(Debug, Deserialize, Validate)]
pub struct PlanetQuery {
    /// Catalog ID or name
    #[validate(length(min = 1, message = "query must not be empty"))]
    pub query: String,
}

/// Resolved catalog record plus derived flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetResult {
    pub id: i64,
    pub name: String,
    pub predicted_disposition: String,
    pub probability_confirmed: f64,
    pub is_confirmed: bool,
    pub confidence_level: ConfidenceLevel,
}

#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetSummary {
    pub id: i64,
    pub name: String,
    pub predicted_disposition: String,
}

impl From<&CatalogRecord> for PlanetSummary {
    fn from(record: &CatalogRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            predicted_disposition: record.predicted_disposition.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetPage {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub planets: Vec<PlanetSummary>,
}

/// Aggregate view of the catalog.
///
/// `confirmed_count` / `false_positive_count` use the probability threshold,
/// `confirmed_candidates` / `false_positives` use the stored disposition label.
/// Both are reported because the source data does not always agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStatistics {
    pub total_objects: usize,
    pub confirmed_count: usize,
    pub false_positive_count: usize,
    pub confirmed_candidates: usize,
    pub false_positives: usize,
    pub average_probability: f64,
    pub high_confidence: usize,
    pub medium_confidence: usize,
    pub low_confidence: usize,
}
