//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Precomputed catalog table (CSV)
    pub catalog_path: PathBuf,

    /// Classifier artifact (ONNX)
    pub model_path: PathBuf,

    /// Optional feature metadata sidecar (JSON)
    pub model_metadata_path: PathBuf,

    /// Page size used when a list request omits `limit`
    pub list_default_limit: usize,

    /// Upper bound for any requested `limit`
    pub list_max_limit: usize,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            catalog_path: PathBuf::from("data/results.csv"),
            model_path: PathBuf::from("models/exoplanet_gbm.onnx"),
            model_metadata_path: PathBuf::from("models/exoplanet_gbm.json"),
            list_default_limit: 100,
            list_max_limit: 1000,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let list_max_limit = parse_var("LIST_MAX_LIMIT").unwrap_or(defaults.list_max_limit);

        Self {
            port: parse_var("PORT").unwrap_or(defaults.port),

            catalog_path: env::var("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),

            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),

            model_metadata_path: env::var("MODEL_METADATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_metadata_path),

            list_default_limit: parse_var("LIST_DEFAULT_LIMIT")
                .unwrap_or(defaults.list_default_limit)
                .min(list_max_limit),

            list_max_limit,

            environment: env::var("ENVIRONMENT")
                .unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard_expectations() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.list_default_limit, 100);
        assert!(config.list_default_limit <= config.list_max_limit);
        assert!(!config.is_production());
    }

    #[test]
    fn test_production_flag() {
        let config = Config {
            environment: "production".to_string(),
            ..Default::default()
        };
        assert!(config.is_production());
    }

    // Only test in the crate that touches the process environment
    #[test]
    fn test_from_env_falls_back_and_caps_default_limit() {
        env::set_var("PORT", "abc");
        env::set_var("LIST_DEFAULT_LIMIT", "5000");
        env::set_var("LIST_MAX_LIMIT", "10");

        let config = Config::from_env();

        env::remove_var("PORT");
        env::remove_var("LIST_DEFAULT_LIMIT");
        env::remove_var("LIST_MAX_LIMIT");

        assert_eq!(config.port, 8000);
        assert_eq!(config.list_max_limit, 10);
        assert_eq!(config.list_default_limit, 10);
    }
}
