// ABOUTME: Final analysis record returned to callers and the narrative fields it is built from
// ABOUTME: Enforces bounded, non-empty lists at construction so every analysis is displayable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::RiskCategory;
use crate::constants::{fallback, limits, placeholders};

/// Structured fields recovered from a generated narrative
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NarrativeFields {
    /// Why the hike received its category
    pub explanation: String,
    /// Personalized recommendations
    pub recommendations: Vec<String>,
    /// Safety priorities in order of importance
    pub safety_priorities: Vec<String>,
    /// Suggested gear
    pub gear_suggestions: Vec<String>,
}

/// Complete risk analysis for one hike
///
/// Built once through [`DetailedRiskAnalysis::enhanced`] or
/// [`DetailedRiskAnalysis::reduced`] and never mutated afterwards. All three
/// lists hold between one and six items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedRiskAnalysis {
    category: RiskCategory,
    explanation: String,
    recommendations: Vec<String>,
    safety_priorities: Vec<String>,
    gear_suggestions: Vec<String>,
    is_enhanced: bool,
    created_at: DateTime<Utc>,
}

impl DetailedRiskAnalysis {
    /// Assemble an analysis from fields extracted out of a language-model response
    #[must_use]
    pub fn enhanced(category: RiskCategory, fields: NarrativeFields) -> Self {
        let explanation = if fields.explanation.trim().is_empty() {
            category.description().to_owned()
        } else {
            fields.explanation
        };

        Self {
            category,
            explanation,
            recommendations: bounded(
                fields.recommendations,
                placeholders::RECOMMENDATIONS,
                "recommendations",
            ),
            safety_priorities: bounded(
                fields.safety_priorities,
                placeholders::SAFETY_PRIORITIES,
                "safety_priorities",
            ),
            gear_suggestions: bounded(fields.gear_suggestions, placeholders::GEAR, "gear"),
            is_enhanced: true,
            created_at: Utc::now(),
        }
    }

    /// Assemble a reduced-confidence analysis produced without a language model
    #[must_use]
    pub fn reduced(category: RiskCategory, explanation: impl Into<String>) -> Self {
        Self {
            category,
            explanation: explanation.into(),
            recommendations: vec![fallback::RECOMMENDATIONS.to_owned()],
            safety_priorities: vec![fallback::SAFETY_PRIORITIES.to_owned()],
            gear_suggestions: vec![fallback::GEAR.to_owned()],
            is_enhanced: false,
            created_at: Utc::now(),
        }
    }

    /// Assigned risk category
    #[must_use]
    pub const fn category(&self) -> RiskCategory {
        self.category
    }

    /// Narrative explanation
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Personalized recommendations
    #[must_use]
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// Safety priorities
    #[must_use]
    pub fn safety_priorities(&self) -> &[String] {
        &self.safety_priorities
    }

    /// Gear suggestions
    #[must_use]
    pub fn gear_suggestions(&self) -> &[String] {
        &self.gear_suggestions
    }

    /// Whether the analysis includes language-model guidance
    #[must_use]
    pub const fn is_enhanced(&self) -> bool {
        self.is_enhanced
    }

    /// When the analysis was assembled
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn bounded(mut items: Vec<String>, placeholder: &str, field: &'static str) -> Vec<String> {
    items.retain(|item| !item.trim().is_empty());
    if items.is_empty() {
        warn!(field, "Empty list supplied to enhanced analysis, substituting placeholder");
        return vec![placeholder.to_owned()];
    }
    items.truncate(limits::MAX_LIST_ITEMS);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhanced_caps_lists_and_fills_empty_ones() {
        let fields = NarrativeFields {
            explanation: String::new(),
            recommendations: (1..=9).map(|i| format!("item {i}")).collect(),
            safety_priorities: Vec::new(),
            gear_suggestions: vec!["   ".to_owned(), "Map".to_owned()],
        };
        let analysis = DetailedRiskAnalysis::enhanced(RiskCategory::Moderate, fields);

        assert!(analysis.is_enhanced());
        assert_eq!(analysis.recommendations().len(), 6);
        assert_eq!(
            analysis.safety_priorities(),
            [placeholders::SAFETY_PRIORITIES.to_owned()]
        );
        assert_eq!(analysis.gear_suggestions(), ["Map".to_owned()]);
        assert_eq!(
            analysis.explanation(),
            RiskCategory::Moderate.description()
        );
    }

    #[test]
    fn test_reduced_uses_single_placeholders() {
        let analysis = DetailedRiskAnalysis::reduced(RiskCategory::Easy, "offline");
        assert!(!analysis.is_enhanced());
        assert_eq!(analysis.explanation(), "offline");
        assert_eq!(analysis.recommendations().len(), 1);
        assert_eq!(analysis.safety_priorities().len(), 1);
        assert_eq!(analysis.gear_suggestions().len(), 1);
    }
}
