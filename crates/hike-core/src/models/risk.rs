// ABOUTME: Discrete trail risk categories produced by the classifier
// ABOUTME: Ordered severity buckets with descriptions, labels, colors, and levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk category assigned to a hike
///
/// Variants are declared in ascending severity so the derived ordering gives
/// `Easy < Moderate < Difficult < HighRisk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    /// Suitable for all skill levels
    Easy,
    /// Requires some experience
    Moderate,
    /// Requires good fitness and experience
    Difficult,
    /// Significant danger, experienced hikers only
    HighRisk,
}

impl RiskCategory {
    /// All categories in ascending severity
    pub const ALL: [Self; 4] = [Self::Easy, Self::Moderate, Self::Difficult, Self::HighRisk];

    /// Label used in prompts and reports
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Difficult => "Difficult",
            Self::HighRisk => "HighRisk",
        }
    }

    /// Severity level from 1 (easy) to 4 (high risk)
    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Moderate => 2,
            Self::Difficult => 3,
            Self::HighRisk => 4,
        }
    }

    /// Display color name
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Easy => "green",
            Self::Moderate => "yellow",
            Self::Difficult => "orange",
            Self::HighRisk => "red",
        }
    }

    /// Canned description, also the last-resort explanation for parsed analyses
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::HighRisk => "This hike presents significant challenges and potential dangers. It is recommended only for experienced hikers with proper equipment.",
            Self::Difficult => "This hike is challenging and requires a good level of fitness and experience. Hikers should be prepared for steep inclines and rough terrain.",
            Self::Moderate => "This hike is suitable for hikers with some experience. It may include some steep sections and uneven terrain, but is generally manageable.",
            Self::Easy => "This hike is suitable for all skill levels, including beginners. The terrain is generally flat and well-maintained.",
        }
    }

    /// Parse from a label or snake-case name (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "moderate" => Some(Self::Moderate),
            "difficult" => Some(Self::Difficult),
            "highrisk" | "high_risk" | "high-risk" => Some(Self::HighRisk),
            _ => None,
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
