// ABOUTME: Validation findings reported for trail parameters before analysis
// ABOUTME: Tagged variants for missing and out-of-range distance and elevation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single problem found in trail parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ValidationFinding {
    /// Distance was not provided
    MissingDistance,
    /// Distance is out of range or implausible
    InvalidDistance(String),
    /// Elevation gain was not provided
    MissingElevation,
    /// Elevation gain is out of range or implausible
    InvalidElevation(String),
}

impl ValidationFinding {
    /// User-facing message
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::MissingDistance => "Distance is required",
            Self::MissingElevation => "Elevation gain is required",
            Self::InvalidDistance(message) | Self::InvalidElevation(message) => message,
        }
    }

    /// Whether the finding concerns the distance field
    #[must_use]
    pub const fn is_distance(&self) -> bool {
        matches!(self, Self::MissingDistance | Self::InvalidDistance(_))
    }
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
