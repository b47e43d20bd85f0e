// ABOUTME: Ordered strategy chain recovering bounded, non-empty lists from generated text
// ABOUTME: Tries aliased sections, then marker lines, then keyword lines, then a placeholder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

//! # List Extraction
//!
//! Each list concept is recovered by the first strategy that yields at least
//! one non-empty item after cleaning. The chain is an explicit ordered list so
//! every strategy can be exercised on its own.

use hike_core::constants::{limits, placeholders, sections as headers};
use tracing::debug;

use super::markers::{clean_item, starts_with_marker, starts_with_number};
use super::sections::SectionMap;

/// How an aliased section body is split into items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Every non-blank line is an item
    Bulleted,
    /// Numbered lines are items; without any, fall back to `Bulleted`
    NumberedThenBulleted,
}

/// The three list fields of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListConcept {
    /// Personalized recommendations
    Recommendations,
    /// Safety priorities
    Priorities,
    /// Gear suggestions
    Gear,
}

impl ListConcept {
    /// Section names consulted for this concept, in priority order
    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Recommendations => &[
                headers::PERSONALIZED_RECOMMENDATIONS,
                "RECOMMENDATIONS",
                "PERSONALIZED ADVICE",
                "ADVICE",
            ],
            Self::Priorities => &[
                headers::SAFETY_PRIORITIES,
                "PRIORITIES",
                "SAFETY CONCERNS",
                "KEY SAFETY POINTS",
            ],
            Self::Gear => &[
                headers::GEAR_SUGGESTIONS,
                "GEAR",
                "EQUIPMENT",
                "GEAR RECOMMENDATIONS",
            ],
        }
    }

    /// Parse mode for aliased sections
    #[must_use]
    pub const fn parse_mode(&self) -> ParseMode {
        match self {
            Self::Recommendations | Self::Gear => ParseMode::Bulleted,
            Self::Priorities => ParseMode::NumberedThenBulleted,
        }
    }

    /// Lower-case keywords that mark a relevant free-text line
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Recommendations => &["recommend", "advice", "should", "consider"],
            Self::Priorities => &["safety", "priority", "important", "critical", "danger"],
            Self::Gear => &["gear", "equipment", "pack", "bring", "carry"],
        }
    }

    /// Single-item list used when nothing could be recovered
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Recommendations => placeholders::RECOMMENDATIONS,
            Self::Priorities => placeholders::SAFETY_PRIORITIES,
            Self::Gear => placeholders::GEAR,
        }
    }

    /// Identifier used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recommendations => "recommendations",
            Self::Priorities => "priorities",
            Self::Gear => "gear",
        }
    }
}

/// One way of recovering candidate list items
pub trait ExtractionStrategy: Send + Sync {
    /// Strategy name used in logs
    fn name(&self) -> &'static str;

    /// Candidate items, before cleaning and truncation
    fn candidates(&self, concept: ListConcept, sections: &SectionMap, raw: &str) -> Vec<String>;
}

/// Tries the concept's section aliases in order and returns the first body with items
///
/// Lines are returned trimmed but otherwise raw; marker stripping happens once,
/// in the shared cleaning step.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasedSectionStrategy;

impl AliasedSectionStrategy {
    fn bulleted(body: &str) -> Vec<String> {
        body.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }

    fn numbered(body: &str) -> Vec<String> {
        let items: Vec<String> = body
            .lines()
            .map(str::trim)
            .filter(|line| starts_with_number(line))
            .map(str::to_owned)
            .collect();

        if items.is_empty() {
            Self::bulleted(body)
        } else {
            items
        }
    }

    fn parse(mode: ParseMode, body: &str) -> Vec<String> {
        match mode {
            ParseMode::Bulleted => Self::bulleted(body),
            ParseMode::NumberedThenBulleted => Self::numbered(body),
        }
    }
}

impl ExtractionStrategy for AliasedSectionStrategy {
    fn name(&self) -> &'static str {
        "aliased_section"
    }

    fn candidates(&self, concept: ListConcept, sections: &SectionMap, _raw: &str) -> Vec<String> {
        concept
            .aliases()
            .iter()
            .filter_map(|alias| sections.get(alias))
            .map(|body| Self::parse(concept.parse_mode(), body))
            .find(|lines| lines.iter().any(|line| !clean_item(line).is_empty()))
            .unwrap_or_default()
    }
}

/// Collects every raw line that starts with a bullet or numbered marker
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerScanStrategy;

impl ExtractionStrategy for MarkerScanStrategy {
    fn name(&self) -> &'static str {
        "marker_scan"
    }

    fn candidates(&self, _concept: ListConcept, _sections: &SectionMap, raw: &str) -> Vec<String> {
        raw.lines()
            .map(str::trim)
            .filter(|line| starts_with_marker(line))
            .map(str::to_owned)
            .collect()
    }
}

/// Collects longer raw lines that mention one of the concept's keywords
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScanStrategy;

impl ExtractionStrategy for KeywordScanStrategy {
    fn name(&self) -> &'static str {
        "keyword_scan"
    }

    fn candidates(&self, concept: ListConcept, _sections: &SectionMap, raw: &str) -> Vec<String> {
        raw.lines()
            .map(str::trim)
            .filter(|line| line.chars().count() > limits::MIN_KEYWORD_LINE_CHARS)
            .filter(|line| {
                let lower = line.to_lowercase();
                concept.keywords().iter().any(|keyword| lower.contains(keyword))
            })
            .map(str::to_owned)
            .collect()
    }
}

/// Runs strategies in order and returns the first non-empty cleaned result
pub struct ListExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl Default for ListExtractor {
    fn default() -> Self {
        Self::new(vec![
            Box::new(AliasedSectionStrategy),
            Box::new(MarkerScanStrategy),
            Box::new(KeywordScanStrategy),
        ])
    }
}

impl ListExtractor {
    /// Create an extractor with a custom strategy order
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    /// Names of the configured strategies, in order
    #[must_use]
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Extract a list for `concept`, always returning one to six items
    #[must_use]
    pub fn extract(&self, concept: ListConcept, sections: &SectionMap, raw: &str) -> Vec<String> {
        for strategy in &self.strategies {
            let items = clean_items(strategy.candidates(concept, sections, raw));
            if !items.is_empty() {
                debug!(
                    concept = concept.as_str(),
                    strategy = strategy.name(),
                    count = items.len(),
                    "List extracted"
                );
                return items;
            }
        }

        debug!(concept = concept.as_str(), strategy = "placeholder", "List extracted");
        vec![concept.placeholder().to_owned()]
    }
}

/// Extract a list with the default strategy chain
#[must_use]
pub fn extract_list(concept: ListConcept, sections: &SectionMap, raw: &str) -> Vec<String> {
    ListExtractor::default().extract(concept, sections, raw)
}

fn clean_items(candidates: Vec<String>) -> Vec<String> {
    candidates
        .into_iter()
        .map(|item| clean_item(&item))
        .filter(|item| !item.is_empty())
        .take(limits::MAX_LIST_ITEMS)
        .collect()
}
