//! Catalog Resolver
//!
//! Three-tier lookup over the loaded catalog:
//! 1. exact numeric ID (query is all decimal digits)
//! 2. exact name, case-insensitive (both sides upper-cased)
//! 3. name substring, case-insensitive
//!
//! First match in load order wins in every tier.

use crate::{AppError, AppResult};
use crate::logic::threshold::{confidence_level, is_confirmed};
use crate::models::{
    Catalog, CatalogRecord, CatalogStatistics, ConfidenceLevel, PlanetPage, PlanetResult,
    PlanetSummary,
};

/// Read-only lookup service over an immutable catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogResolver {
    catalog: Catalog,
}

impl CatalogResolver {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn is_loaded(&self) -> bool {
        !self.catalog.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.catalog.len()
    }

    fn ensure_loaded(&self) -> AppResult<&[CatalogRecord]> {
        if self.catalog.is_empty() {
            return Err(AppError::catalog_not_loaded());
        }
        Ok(self.catalog.records())
    }

    /// Find the single record matching `query`
    pub fn resolve(&self, query: &str) -> AppResult<&CatalogRecord> {
        let records = self.ensure_loaded()?;
        let query = query.trim();

        if let Some(id) = parse_catalog_id(query) {
            if let Some(record) = records.iter().find(|r| r.id == id) {
                return Ok(record);
            }
        }

        let folded = query.to_uppercase();

        if let Some(record) = records.iter().find(|r| r.name.to_uppercase() == folded) {
            return Ok(record);
        }

        records
            .iter()
            .find(|r| r.name.to_uppercase().contains(&folded))
            .ok_or_else(|| AppError::planet_not_found(query))
    }

    /// Resolve and attach the derived flags
    pub fn detect(&self, query: &str) -> AppResult<PlanetResult> {
        let record = self.resolve(query)?;
        let probability = record.probability_confirmed;

        tracing::debug!("Resolved '{}' to {} ({})", query.trim(), record.id, record.name);

        Ok(PlanetResult {
            id: record.id,
            name: record.name.clone(),
            predicted_disposition: record.predicted_disposition.clone(),
            probability_confirmed: probability,
            is_confirmed: is_confirmed(probability),
            confidence_level: confidence_level(probability),
        })
    }

    /// One page of catalog summaries. `limit` is taken as already capped.
    pub fn list(&self, offset: usize, limit: usize) -> AppResult<PlanetPage> {
        let records = self.ensure_loaded()?;

        let planets = records
            .iter()
            .skip(offset)
            .take(limit)
            .map(PlanetSummary::from)
            .collect();

        Ok(PlanetPage {
            total: records.len(),
            limit,
            offset,
            planets,
        })
    }

    /// Aggregate counts over the whole catalog
    pub fn statistics(&self) -> AppResult<CatalogStatistics> {
        let records = self.ensure_loaded()?;

        let mut stats = CatalogStatistics {
            total_objects: records.len(),
            confirmed_count: 0,
            false_positive_count: 0,
            confirmed_candidates: 0,
            false_positives: 0,
            average_probability: 0.0,
            high_confidence: 0,
            medium_confidence: 0,
            low_confidence: 0,
        };

        let mut probability_sum = 0.0f64;

        for record in records {
            let probability = record.probability_confirmed;
            probability_sum += probability;

            if is_confirmed(probability) {
                stats.confirmed_count += 1;
            } else {
                stats.false_positive_count += 1;
            }

            match record.predicted_disposition.trim().to_uppercase().as_str() {
                "CANDIDATE" => stats.confirmed_candidates += 1,
                "FALSE POSITIVE" => stats.false_positives += 1,
                _ => {}
            }

            match confidence_level(probability) {
                ConfidenceLevel::High => stats.high_confidence += 1,
                ConfidenceLevel::Medium => stats.medium_confidence += 1,
                ConfidenceLevel::Low => stats.low_confidence += 1,
            }
        }

        let average = probability_sum / records.len() as f64;
        stats.average_probability = (average * 10_000.0).round() / 10_000.0;

        Ok(stats)
    }
}

/// Purely decimal queries are treated as catalog IDs
fn parse_catalog_id(query: &str) -> Option<i64> {
    if query.chars().all(|c| c.is_ascii_digit()) {
        query.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests;
