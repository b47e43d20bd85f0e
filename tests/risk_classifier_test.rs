// ABOUTME: Integration tests for risk classification and score bucketing
// ABOUTME: Verifies bucket boundaries, fail-safe HighRisk paths, and bundled model results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::CountingScoringModel;
use hike_core::models::{RiskCategory, Terrain, TrailParameters, WildlifeDanger};
use hike_intelligence::{category_for_score, RiskClassifier, UnavailableScoringModel};

// =============================================================================
// Score Bucketing
// =============================================================================

#[test]
fn test_bucket_boundaries() {
    assert_eq!(category_for_score(0.0), RiskCategory::Easy);
    assert_eq!(category_for_score(19.99), RiskCategory::Easy);
    assert_eq!(category_for_score(20.0), RiskCategory::Moderate);
    assert_eq!(category_for_score(49.99), RiskCategory::Moderate);
    assert_eq!(category_for_score(50.0), RiskCategory::Difficult);
    assert_eq!(category_for_score(100.0), RiskCategory::Difficult);
}

#[test]
fn test_out_of_range_scores_are_high_risk() {
    assert_eq!(category_for_score(-0.1), RiskCategory::HighRisk);
    assert_eq!(category_for_score(100.01), RiskCategory::HighRisk);
    assert_eq!(category_for_score(f64::NAN), RiskCategory::HighRisk);
    assert_eq!(category_for_score(f64::INFINITY), RiskCategory::HighRisk);
    assert_eq!(category_for_score(f64::NEG_INFINITY), RiskCategory::HighRisk);
}

#[test]
fn test_every_score_maps_to_exactly_one_category() {
    for tenth in -100..=1100 {
        let score = f64::from(tenth) / 10.0;
        let category = category_for_score(score);
        assert!(RiskCategory::ALL.contains(&category), "score {score}");
    }
}

// =============================================================================
// Classifier With Injected Models
// =============================================================================

#[test]
fn test_classify_uses_model_score() {
    common::init_test_logging();
    let model = Arc::new(CountingScoringModel::returning(10.0));
    let classifier = RiskClassifier::new(model.clone());

    let params = TrailParameters::new(3.0, 100.0, Terrain::Paved, WildlifeDanger::Low);
    assert_eq!(classifier.classify(&params), RiskCategory::Easy);
    assert_eq!(model.calls(), 1);
}

#[test]
fn test_missing_distance_is_high_risk_without_scoring() {
    common::init_test_logging();
    let model = Arc::new(CountingScoringModel::returning(10.0));
    let classifier = RiskClassifier::new(model.clone());

    let params = TrailParameters {
        distance_km: None,
        elevation_gain_m: Some(100.0),
        ..TrailParameters::default()
    };
    assert_eq!(classifier.classify(&params), RiskCategory::HighRisk);
    assert_eq!(model.calls(), 0);
}

#[test]
fn test_missing_elevation_is_high_risk_without_scoring() {
    let model = Arc::new(CountingScoringModel::returning(10.0));
    let classifier = RiskClassifier::new(model.clone());

    let params = TrailParameters::default().with_distance(4.0);
    assert_eq!(classifier.classify(&params), RiskCategory::HighRisk);
    assert_eq!(model.calls(), 0);
}

#[test]
fn test_scoring_failure_is_high_risk() {
    common::init_test_logging();
    let model = Arc::new(CountingScoringModel::failing());
    let classifier = RiskClassifier::new(model.clone());

    let params = TrailParameters::new(3.0, 100.0, Terrain::Paved, WildlifeDanger::Low);
    assert_eq!(classifier.classify(&params), RiskCategory::HighRisk);
    assert_eq!(model.calls(), 1);
}

#[test]
fn test_unavailable_model_is_high_risk() {
    let classifier = RiskClassifier::new(Arc::new(UnavailableScoringModel));
    let params = TrailParameters::new(3.0, 50.0, Terrain::Paved, WildlifeDanger::Low);
    assert_eq!(classifier.classify(&params), RiskCategory::HighRisk);
    assert_eq!(classifier.model_name(), "unavailable");
}

#[test]
fn test_out_of_range_model_score_is_high_risk() {
    let classifier = RiskClassifier::new(Arc::new(CountingScoringModel::returning(140.0)));
    let params = TrailParameters::new(30.0, 2000.0, Terrain::Rocky, WildlifeDanger::High);
    assert_eq!(classifier.classify(&params), RiskCategory::HighRisk);
}

// =============================================================================
// Bundled Model
// =============================================================================

#[test]
fn test_bundled_model_reference_trails() {
    common::init_test_logging();
    let classifier = RiskClassifier::from_model_path(None);
    assert_eq!(classifier.model_name(), "trail-risk-linear");

    let cases = [
        (TrailParameters::new(3.0, 50.0, Terrain::Paved, WildlifeDanger::Low), RiskCategory::Easy),
        (TrailParameters::new(10.0, 500.0, Terrain::Dirt, WildlifeDanger::Low), RiskCategory::Moderate),
        (TrailParameters::new(15.0, 1000.0, Terrain::Rocky, WildlifeDanger::Low), RiskCategory::Difficult),
        (TrailParameters::new(25.0, 1500.0, Terrain::Rocky, WildlifeDanger::High), RiskCategory::HighRisk),
    ];

    for (params, expected) in cases {
        assert_eq!(classifier.classify(&params), expected, "{params:?}");
    }
}

#[test]
fn test_wildlife_danger_raises_risk() {
    let classifier = RiskClassifier::from_model_path(None);
    let calm = TrailParameters::new(8.0, 200.0, Terrain::Dirt, WildlifeDanger::Low);
    let dangerous = calm.with_wildlife_danger(WildlifeDanger::High);

    assert!(classifier.classify(&dangerous) >= classifier.classify(&calm));
}

#[test]
fn test_classifier_is_shareable_across_threads() {
    let classifier = RiskClassifier::from_model_path(None);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let classifier = classifier.clone();
            std::thread::spawn(move || {
                let params = TrailParameters::new(
                    f64::from(i).mul_add(5.0, 2.0),
                    100.0,
                    Terrain::Dirt,
                    WildlifeDanger::Low,
                );
                classifier.classify(&params)
            })
        })
        .collect();

    for handle in handles {
        let category = handle.join().unwrap();
        assert!(RiskCategory::ALL.contains(&category));
    }
}
