//! Probability thresholds
//!
//! Shared by catalog lookups and live predictions. Both derived flags are pure
//! functions of the positive-class probability.

use crate::models::ConfidenceLevel;

/// Lower bound (inclusive) of the High bucket
pub const HIGH_CONFIDENCE_MIN: f64 = 0.8;

/// Lower bound (inclusive) of the Medium bucket
pub const MEDIUM_CONFIDENCE_MIN: f64 = 0.5;

/// Probabilities strictly above this count as confirmed
pub const CONFIRMED_THRESHOLD: f64 = 0.5;

pub fn confidence_level(probability: f64) -> ConfidenceLevel {
    if probability >= HIGH_CONFIDENCE_MIN {
        ConfidenceLevel::High
    } else if probability >= MEDIUM_CONFIDENCE_MIN {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Ignores any stored disposition label
pub fn is_confirmed(probability: f64) -> bool {
    probability > CONFIRMED_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries_go_to_higher_bucket() {
        assert_eq!(confidence_level(0.8), ConfidenceLevel::High);
        assert_eq!(confidence_level(0.5), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(0.7999), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(0.4999), ConfidenceLevel::Low);
    }

    #[test]
    fn test_bucket_extremes() {
        assert_eq!(confidence_level(1.0), ConfidenceLevel::High);
        assert_eq!(confidence_level(0.0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_confirmed_is_strict() {
        assert!(!is_confirmed(0.5));
        assert!(is_confirmed(0.5001));
        assert!(!is_confirmed(0.12));
    }

    #[test]
    fn test_bucketing_agrees_with_confirmation_across_range() {
        for step in 0..=1000 {
            let p = step as f64 / 1000.0;
            let level = confidence_level(p);
            match level {
                ConfidenceLevel::High => assert!(p >= 0.8),
                ConfidenceLevel::Medium => assert!((0.5..0.8).contains(&p)),
                ConfidenceLevel::Low => assert!(p < 0.5),
            }
            assert_eq!(is_confirmed(p), p > 0.5);
        }
    }
}
