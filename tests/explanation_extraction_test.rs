// ABOUTME: Integration tests for explanation extraction and full narrative assembly
// ABOUTME: Covers section aliases, standalone paragraphs, canned descriptions, and empty input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use hike_core::constants::placeholders;
use hike_core::models::RiskCategory;
use hike_intelligence::extract_narrative;
use hike_intelligence::narrative::{extract_explanation, parse_sections};

fn explanation(raw: &str, category: RiskCategory) -> String {
    extract_explanation(&parse_sections(raw), raw, category)
}

#[test]
fn test_primary_section_is_returned_trimmed() {
    let text = explanation(common::WELL_FORMED_RESPONSE, RiskCategory::Difficult);
    assert_eq!(
        text,
        "This trail combines a long distance with sustained climbing on loose rock. \
The elevation gain is significant for a day hike."
    );
}

#[test]
fn test_alias_sections_are_accepted() {
    assert_eq!(
        explanation("Explanation:\nShort and flat.", RiskCategory::Easy),
        "Short and flat."
    );
    assert_eq!(
        explanation("RISK ANALYSIS:\nExposed ridge.\nNo water sources.", RiskCategory::Difficult),
        "Exposed ridge.\nNo water sources."
    );
}

#[test]
fn test_empty_primary_section_falls_through_to_alias() {
    let raw = "RISK EXPLANATION:\nEXPLANATION:\nThe climb is relentless.";
    assert_eq!(explanation(raw, RiskCategory::Moderate), "The climb is relentless.");
}

#[test]
fn test_first_long_paragraph_without_colon() {
    let raw = "Short intro.\n\nNote: this paragraph has a colon and is long enough to count otherwise.\n\n\
This paragraph is long enough and has no colon so it becomes the explanation.\n\n\
A later paragraph that would also qualify as an explanation on its own merits.";

    assert_eq!(
        explanation(raw, RiskCategory::Moderate),
        "This paragraph is long enough and has no colon so it becomes the explanation."
    );
}

#[test]
fn test_paragraph_of_exactly_fifty_chars_is_too_short() {
    let fifty = "a".repeat(50);
    assert_eq!(
        explanation(&fifty, RiskCategory::Easy),
        RiskCategory::Easy.description()
    );

    let fifty_one = "a".repeat(51);
    assert_eq!(explanation(&fifty_one, RiskCategory::Easy), fifty_one);
}

#[test]
fn test_canned_description_when_nothing_usable() {
    for category in RiskCategory::ALL {
        assert_eq!(explanation("", category), category.description());
    }
}

#[test]
fn test_unstructured_response_uses_opening_paragraph() {
    let text = explanation(common::UNSTRUCTURED_RESPONSE, RiskCategory::Moderate);
    assert!(text.starts_with("This hike looks fairly manageable"));
    assert!(!text.contains("Recommend starting early"));
}

// =============================================================================
// Full Narrative
// =============================================================================

#[test]
fn test_empty_response_yields_all_defaults() {
    let fields = extract_narrative("", RiskCategory::Moderate);

    assert_eq!(fields.explanation, RiskCategory::Moderate.description());
    assert_eq!(fields.recommendations, [placeholders::RECOMMENDATIONS]);
    assert_eq!(fields.safety_priorities, [placeholders::SAFETY_PRIORITIES]);
    assert_eq!(fields.gear_suggestions, [placeholders::GEAR]);
}

#[test]
fn test_well_formed_response_fills_every_field() {
    let fields = extract_narrative(common::WELL_FORMED_RESPONSE, RiskCategory::Difficult);

    assert!(fields.explanation.contains("sustained climbing"));
    assert_eq!(fields.recommendations.len(), 4);
    assert_eq!(fields.safety_priorities.len(), 3);
    assert_eq!(fields.gear_suggestions, ["Trekking poles", "Sturdy hiking boots", "Headlamp"]);
}

#[test]
fn test_unstructured_response_shares_marker_items() {
    let fields = extract_narrative(common::UNSTRUCTURED_RESPONSE, RiskCategory::Moderate);

    let expected = [
        "Recommend starting early in the morning",
        "Bring plenty of water and electrolytes",
        "Wear shoes with good grip for the rocky sections",
    ];
    assert_eq!(fields.recommendations, expected);
    assert_eq!(fields.safety_priorities, expected);
    assert_eq!(fields.gear_suggestions, expected);
}
