// ABOUTME: Hiker profile used to personalize language-model guidance
// ABOUTME: Experience and fitness levels with fixed descriptions and a documented default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use serde::{Deserialize, Serialize};

use super::RiskCategory;

/// Hiking experience, ordered from least to most experienced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// New to hiking
    Beginner,
    /// Regular day hiker
    Intermediate,
    /// Comfortable with challenging terrain
    Advanced,
    /// Technical routes and wilderness navigation
    Expert,
}

impl ExperienceLevel {
    /// Short label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    /// Fixed description embedded in the system instruction
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Beginner => "New to hiking, prefers well-marked trails under 5km",
            Self::Intermediate => "Comfortable with day hikes up to 15km on various terrain",
            Self::Advanced => "Experienced with challenging terrain and multi-day trips",
            Self::Expert => "Highly experienced with technical routes and wilderness navigation",
        }
    }

    /// Parse from label (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }
}

/// Cardiovascular fitness
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// Limited cardio fitness
    Low,
    /// Regular light exercise
    Moderate,
    /// Active lifestyle
    Good,
    /// Seeks demanding adventures
    Excellent,
}

impl FitnessLevel {
    /// Short label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Fixed description embedded in the system instruction
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Low => "Limited cardio fitness, prefers easier terrain",
            Self::Moderate => "Regular light exercise, comfortable with moderate exertion",
            Self::Good => "Active lifestyle, enjoys challenging physical activities",
            Self::Excellent => "High fitness level, seeks physically demanding adventures",
        }
    }

    /// Parse from label (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "good" => Some(Self::Good),
            "excellent" => Some(Self::Excellent),
            _ => None,
        }
    }
}

/// Hiker profile for personalized recommendations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Hiking experience
    pub experience_level: ExperienceLevel,
    /// Fitness level
    pub fitness_level: FitnessLevel,
    /// Difficulty the hiker would like to stay within, if any
    pub preferred_difficulty: Option<RiskCategory>,
    /// Free-text description of previous hiking experience
    pub experience_description: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            experience_level: ExperienceLevel::Intermediate,
            fitness_level: FitnessLevel::Moderate,
            preferred_difficulty: None,
            experience_description: "Regular weekend hiker".to_owned(),
        }
    }
}

impl UserProfile {
    /// Create a profile whose free-text description mirrors the experience level
    #[must_use]
    pub fn new(experience_level: ExperienceLevel, fitness_level: FitnessLevel) -> Self {
        Self {
            experience_level,
            fitness_level,
            preferred_difficulty: None,
            experience_description: experience_level.description().to_owned(),
        }
    }

    /// Set the preferred difficulty
    #[must_use]
    pub const fn with_preferred_difficulty(mut self, difficulty: RiskCategory) -> Self {
        self.preferred_difficulty = Some(difficulty);
        self
    }

    /// Replace the free-text experience description
    #[must_use]
    pub fn with_experience_description(mut self, description: impl Into<String>) -> Self {
        self.experience_description = description.into();
        self
    }

    /// Whether a category lies above the hiker's preferred difficulty
    #[must_use]
    pub fn exceeds_preference(&self, category: RiskCategory) -> bool {
        self.preferred_difficulty
            .is_some_and(|preferred| category > preferred)
    }
}
