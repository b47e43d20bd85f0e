// ABOUTME: Recovers the narrative risk explanation from parsed sections or free paragraphs
// ABOUTME: Falls back to the category's canned description when nothing usable is found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use hike_core::constants::{limits, sections as headers};
use hike_core::models::RiskCategory;
use tracing::debug;

use super::sections::SectionMap;

/// Section names consulted for the explanation, in priority order
pub const EXPLANATION_ALIASES: [&str; 3] = [headers::RISK_EXPLANATION, "EXPLANATION", "RISK ANALYSIS"];

/// Extract the explanation for an analysis
///
/// Tries the explanation sections, then the first standalone paragraph that
/// is long enough and contains no colon, then `category.description()`.
#[must_use]
pub fn extract_explanation(sections: &SectionMap, raw: &str, category: RiskCategory) -> String {
    if let Some(body) = sections.first_non_empty(&EXPLANATION_ALIASES) {
        debug!(strategy = "aliased_section", "Explanation extracted");
        return body.trim().to_owned();
    }

    if let Some(paragraph) = first_standalone_paragraph(raw) {
        debug!(strategy = "paragraph", "Explanation extracted");
        return paragraph;
    }

    debug!(strategy = "category_description", "Explanation extracted");
    category.description().to_owned()
}

/// First blank-line-delimited paragraph longer than the minimum with no `:`
fn first_standalone_paragraph(raw: &str) -> Option<String> {
    paragraphs(raw).into_iter().find(|paragraph| {
        paragraph.chars().count() > limits::MIN_EXPLANATION_PARAGRAPH_CHARS
            && !paragraph.contains(':')
    })
}

fn paragraphs(raw: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_owned());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n").trim().to_owned());
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_split_on_whitespace_only_lines() {
        let found = paragraphs("first\n   \nsecond line\nstill second\n\n\nthird");
        assert_eq!(found, ["first", "second line\nstill second", "third"]);
    }
}
