// ABOUTME: Trail parameter value types describing a single hike
// ABOUTME: Distance, elevation gain, terrain, and wildlife danger with scoring codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Surface type of the trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    /// Paved path or road
    Paved,
    /// Packed dirt trail
    #[default]
    Dirt,
    /// Rocky, uneven ground
    Rocky,
    /// Loose sand
    Sandy,
}

impl Terrain {
    /// All terrain variants in declaration order
    pub const ALL: [Self; 4] = [Self::Paved, Self::Dirt, Self::Rocky, Self::Sandy];

    /// Code passed to the scoring model
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Paved => "paved",
            Self::Dirt => "dirt",
            Self::Rocky => "rocky",
            Self::Sandy => "sandy",
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Paved => "Paved",
            Self::Dirt => "Dirt Trail",
            Self::Rocky => "Rocky Terrain",
            Self::Sandy => "Sandy Path",
        }
    }

    /// Parse from a scoring code (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "paved" => Some(Self::Paved),
            "dirt" => Some(Self::Dirt),
            "rocky" => Some(Self::Rocky),
            "sandy" => Some(Self::Sandy),
            _ => None,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Likelihood of dangerous wildlife encounters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WildlifeDanger {
    /// Little or no dangerous wildlife
    #[default]
    Low,
    /// Dangerous wildlife known in the area
    High,
}

impl WildlifeDanger {
    /// Numeric code passed to the scoring model
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low Wildlife Risk",
            Self::High => "High Wildlife Risk",
        }
    }

    /// Parse from `low`/`high` or the numeric code
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "0" => Some(Self::Low),
            "high" | "1" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for WildlifeDanger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Parameters of one hike submitted for analysis
///
/// Distance and elevation are optional because they come straight from user
/// input; validation and classification both treat absence explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrailParameters {
    /// Trail length in kilometers
    pub distance_km: Option<f64>,
    /// Total elevation gain in meters
    pub elevation_gain_m: Option<f64>,
    /// Dominant terrain type
    #[serde(default)]
    pub terrain: Terrain,
    /// Wildlife danger level
    #[serde(default)]
    pub wildlife_danger: WildlifeDanger,
}

impl TrailParameters {
    /// Create parameters with every measurement present
    #[must_use]
    pub const fn new(
        distance_km: f64,
        elevation_gain_m: f64,
        terrain: Terrain,
        wildlife_danger: WildlifeDanger,
    ) -> Self {
        Self {
            distance_km: Some(distance_km),
            elevation_gain_m: Some(elevation_gain_m),
            terrain,
            wildlife_danger,
        }
    }

    /// Set the distance
    #[must_use]
    pub const fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }

    /// Set the elevation gain
    #[must_use]
    pub const fn with_elevation_gain(mut self, elevation_gain_m: f64) -> Self {
        self.elevation_gain_m = Some(elevation_gain_m);
        self
    }

    /// Set the terrain
    #[must_use]
    pub const fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    /// Set the wildlife danger level
    #[must_use]
    pub const fn with_wildlife_danger(mut self, wildlife_danger: WildlifeDanger) -> Self {
        self.wildlife_danger = wildlife_danger;
        self
    }
}
