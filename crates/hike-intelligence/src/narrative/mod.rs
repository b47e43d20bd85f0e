// ABOUTME: Narrative extraction pipeline turning free-form generated text into structured fields
// ABOUTME: Parses sections once and runs the list and explanation extractors over them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

//! # Narrative Extraction
//!
//! Generated guidance is requested in a fixed four-section layout but is not
//! guaranteed to follow it. Extraction therefore runs in layers: a section
//! parser builds a case-insensitive map of headed blocks, then each field is
//! recovered by an ordered chain of strategies that ends in a canned value.
//! Extraction never fails and every list it returns holds one to six items.

mod markers;

/// Explanation extraction
pub mod explanation;
/// List extraction strategies
pub mod lists;
/// Header-based section parsing
pub mod sections;

use hike_core::models::{NarrativeFields, RiskCategory};
use tracing::debug;

pub use explanation::extract_explanation;
pub use lists::{
    extract_list, AliasedSectionStrategy, ExtractionStrategy, KeywordScanStrategy, ListConcept,
    ListExtractor, MarkerScanStrategy, ParseMode,
};
pub use sections::{parse_sections, SectionMap};

/// Extract all narrative fields from a raw response
#[must_use]
pub fn extract_narrative(raw: &str, category: RiskCategory) -> NarrativeFields {
    let sections = parse_sections(raw);
    debug!(sections = ?sections.names(), "Parsed response sections");

    let extractor = ListExtractor::default();
    NarrativeFields {
        explanation: extract_explanation(&sections, raw, category),
        recommendations: extractor.extract(ListConcept::Recommendations, &sections, raw),
        safety_priorities: extractor.extract(ListConcept::Priorities, &sections, raw),
        gear_suggestions: extractor.extract(ListConcept::Gear, &sections, raw),
    }
}
