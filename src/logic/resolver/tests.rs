use super::*;
use crate::models::ConfidenceLevel;

fn record(id: i64, name: &str, disposition: &str, probability: f64) -> CatalogRecord {
    CatalogRecord {
        id,
        name: name.to_string(),
        predicted_disposition: disposition.to_string(),
        probability_confirmed: probability,
    }
}

fn kepler_resolver() -> CatalogResolver {
    CatalogResolver::new(Catalog::from_records(vec![record(
        10811496,
        "K00753.01",
        "FALSE POSITIVE",
        0.12,
    )]))
}

#[test]
fn test_resolve_by_id() {
    let resolver = kepler_resolver();
    let result = resolver.detect("10811496").unwrap();

    assert_eq!(result.name, "K00753.01");
    assert_eq!(result.confidence_level, ConfidenceLevel::Low);
    assert!(!result.is_confirmed);
}

#[test]
fn test_resolve_by_name_is_case_insensitive() {
    let resolver = kepler_resolver();
    let result = resolver.resolve("  k00753.01 ").unwrap();
    assert_eq!(result.id, 10811496);
}

#[test]
fn test_resolve_by_substring() {
    let resolver = kepler_resolver();
    let result = resolver.resolve("753").unwrap();
    assert_eq!(result.id, 10811496);
}

#[test]
fn test_unknown_id_is_not_found() {
    let resolver = kepler_resolver();
    let err = resolver.resolve("999999").unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg.contains("999999")));
}

#[test]
fn test_id_tier_wins_over_name_match() {
    let resolver = CatalogResolver::new(Catalog::from_records(vec![
        record(1, "42", "CANDIDATE", 0.9),
        record(42, "K00042.01", "FALSE POSITIVE", 0.2),
    ]));

    // "42" is the exact name of row 1, but also the ID of row 2
    assert_eq!(resolver.resolve("42").unwrap().id, 42);
}

#[test]
fn test_exact_name_wins_over_earlier_substring() {
    let resolver = CatalogResolver::new(Catalog::from_records(vec![
        record(1, "K00752.01", "CANDIDATE", 0.9),
        record(2, "K00752", "CANDIDATE", 0.9),
    ]));

    assert_eq!(resolver.resolve("k00752").unwrap().id, 2);
}

#[test]
fn test_duplicate_names_pick_first_in_load_order() {
    let resolver = CatalogResolver::new(Catalog::from_records(vec![
        record(7, "Kepler-22 b", "CANDIDATE", 0.95),
        record(8, "Kepler-22 b", "FALSE POSITIVE", 0.1),
    ]));

    assert_eq!(resolver.resolve("KEPLER-22 B").unwrap().id, 7);
    assert_eq!(resolver.resolve("22 b").unwrap().id, 7);
}

#[test]
fn test_unmatched_digits_fall_through_to_name_tiers() {
    let resolver = CatalogResolver::new(Catalog::from_records(vec![record(
        5,
        "TOI-700 d",
        "CANDIDATE",
        0.85,
    )]));

    assert_eq!(resolver.resolve("700").unwrap().id, 5);
}

#[test]
fn test_oversized_numeric_query_does_not_panic() {
    let resolver = kepler_resolver();
    assert!(matches!(
        resolver.resolve("99999999999999999999999"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_resolve_is_idempotent() {
    let resolver = kepler_resolver();
    let first = resolver.detect("753").unwrap();
    let second = resolver.detect("753").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_blank_query_substring_matches_first_record() {
    let resolver = CatalogResolver::new(Catalog::from_records(vec![
        record(11, "K00001.01", "CANDIDATE", 0.9),
        record(12, "K00002.01", "FALSE POSITIVE", 0.1),
    ]));

    assert_eq!(resolver.resolve("   ").unwrap().id, 11);
}

#[test]
fn test_name_match_uses_full_uppercase_mapping() {
    let resolver = CatalogResolver::new(Catalog::from_records(vec![record(
        21,
        "STRAßE-1 b",
        "CANDIDATE",
        0.7,
    )]));

    // 'ß' upper-cases to "SS"
    assert_eq!(resolver.resolve("strasse-1 b").unwrap().id, 21);
    assert_eq!(resolver.resolve("strasse").unwrap().id, 21);
}

#[test]
fn test_empty_catalog_is_unavailable() {
    let resolver = CatalogResolver::default();

    assert!(matches!(
        resolver.resolve("10811496"),
        Err(AppError::ServiceUnavailable(_))
    ));
    assert!(matches!(resolver.statistics(), Err(AppError::ServiceUnavailable(_))));
    assert!(matches!(resolver.list(0, 10), Err(AppError::ServiceUnavailable(_))));
}

#[test]
fn test_confirmation_ignores_stored_disposition() {
    let resolver = CatalogResolver::new(Catalog::from_records(vec![record(
        3,
        "K00003.01",
        "CANDIDATE",
        0.4,
    )]));

    let result = resolver.detect("3").unwrap();
    assert!(!result.is_confirmed);
    assert_eq!(result.predicted_disposition, "CANDIDATE");
}

#[test]
fn test_statistics_buckets_and_average() {
    let resolver = CatalogResolver::new(Catalog::from_records(vec![
        record(1, "A", "CANDIDATE", 0.9),
        record(2, "B", "FALSE POSITIVE", 0.3),
    ]));

    let stats = resolver.statistics().unwrap();
    assert_eq!(stats.total_objects, 2);
    assert_eq!(stats.high_confidence, 1);
    assert_eq!(stats.medium_confidence, 0);
    assert_eq!(stats.low_confidence, 1);
    assert_eq!(stats.average_probability, 0.6);
}

#[test]
fn test_statistics_expose_both_confirmation_counts() {
    let resolver = CatalogResolver::new(Catalog::from_records(vec![
        // label and probability disagree
        record(1, "A", "CANDIDATE", 0.2),
        record(2, "B", "false positive", 0.7),
        record(3, "C", "CANDIDATE", 0.5),
    ]));

    let stats = resolver.statistics().unwrap();
    assert_eq!(stats.confirmed_count, 1);
    assert_eq!(stats.false_positive_count, 2);
    assert_eq!(stats.confirmed_candidates, 2);
    assert_eq!(stats.false_positives, 1);
}

#[test]
fn test_list_pages_in_load_order() {
    let resolver = CatalogResolver::new(Catalog::from_records(
        (1..=5)
            .map(|i| record(i, &format!("K{:05}.01", i), "CANDIDATE", 0.6))
            .collect(),
    ));

    let page = resolver.list(1, 2).unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.planets.len(), 2);
    assert_eq!(page.planets[0].id, 2);
    assert_eq!(page.planets[1].id, 3);

    let past_end = resolver.list(10, 2).unwrap();
    assert!(past_end.planets.is_empty());
    assert_eq!(past_end.total, 5);
}
