// ABOUTME: Pretrained trail scoring model capability with a JSON-backed linear implementation
// ABOUTME: Maps encoded trail features to a continuous risk score or a typed scoring error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

//! # Scoring Model
//!
//! The classifier depends only on the [`ScoringModel`] trait. The shipped
//! implementation is a linear model whose coefficients live in a JSON file:
//! a default set is compiled into the crate and an alternative file can be
//! loaded at startup. When loading fails the caller installs
//! [`UnavailableScoringModel`], which makes every classification fail safe.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use hike_core::errors::{AppError, ErrorCode};
use hike_core::models::TrailParameters;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coefficients compiled into the binary
const BUNDLED_MODEL: &str = include_str!("../models/trail_risk_model.json");

/// Errors raised by scoring models
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Model file could not be read or decoded
    #[error("Failed to load scoring model: {0}")]
    Load(String),

    /// Model rejected the input or produced no score
    #[error("Scoring inference failed: {0}")]
    Inference(String),

    /// No model is installed
    #[error("Scoring model unavailable")]
    Unavailable,
}

impl From<ScoringError> for AppError {
    fn from(error: ScoringError) -> Self {
        let code = match error {
            ScoringError::Load(_) => ErrorCode::StorageError,
            ScoringError::Inference(_) => ErrorCode::InternalError,
            ScoringError::Unavailable => ErrorCode::ExternalServiceUnavailable,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Encoded features consumed by a scoring model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringInput {
    /// Trail length in kilometers
    pub distance_km: f64,
    /// Elevation gain in meters
    pub elevation_gain_m: f64,
    /// Terrain code (`paved`, `dirt`, `rocky`, `sandy`)
    pub terrain_code: &'static str,
    /// Wildlife danger code (`0` low, `1` high)
    pub wildlife_danger_code: i64,
}

impl ScoringInput {
    /// Encode trail parameters, or `None` when a measurement is missing
    #[must_use]
    pub fn from_parameters(params: &TrailParameters) -> Option<Self> {
        Some(Self {
            distance_km: params.distance_km?,
            elevation_gain_m: params.elevation_gain_m?,
            terrain_code: params.terrain.code(),
            wildlife_danger_code: params.wildlife_danger.code(),
        })
    }
}

/// Capability that turns encoded trail features into a continuous score
pub trait ScoringModel: Send + Sync {
    /// Model identifier used in logs
    fn name(&self) -> &str;

    /// Score one input
    ///
    /// # Errors
    ///
    /// Returns an error if the model is unavailable or cannot score the input
    fn score(&self, input: &ScoringInput) -> Result<f64, ScoringError>;
}

/// Linear scoring model loaded from JSON coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearScoringModel {
    /// Model name
    pub name: String,
    /// Model version
    pub version: String,
    /// Constant term
    pub intercept: f64,
    /// Weight per kilometer
    pub distance_coefficient: f64,
    /// Weight per meter of elevation gain
    pub elevation_coefficient: f64,
    /// Additive offset per terrain code
    pub terrain_offsets: HashMap<String, f64>,
    /// Weight applied to the wildlife danger code
    pub wildlife_coefficient: f64,
}

impl LinearScoringModel {
    /// Load the coefficients compiled into the crate
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON is malformed
    pub fn bundled() -> Result<Self, ScoringError> {
        Self::from_json(BUNDLED_MODEL)
    }

    /// Parse and check a model from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a coefficient is not finite,
    /// or a terrain code has no offset
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let model: Self =
            serde_json::from_str(json).map_err(|e| ScoringError::Load(e.to_string()))?;
        model.check()?;
        Ok(model)
    }

    /// Load a model from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid
    pub fn from_file(path: &Path) -> Result<Self, ScoringError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ScoringError::Load(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    fn check(&self) -> Result<(), ScoringError> {
        let coefficients = [
            self.intercept,
            self.distance_coefficient,
            self.elevation_coefficient,
            self.wildlife_coefficient,
        ];
        if coefficients.iter().any(|c| !c.is_finite())
            || self.terrain_offsets.values().any(|c| !c.is_finite())
        {
            return Err(ScoringError::Load(
                "model coefficients must be finite".to_owned(),
            ));
        }

        for terrain in hike_core::models::Terrain::ALL {
            if !self.terrain_offsets.contains_key(terrain.code()) {
                return Err(ScoringError::Load(format!(
                    "missing terrain offset for '{}'",
                    terrain.code()
                )));
            }
        }
        Ok(())
    }
}

impl ScoringModel for LinearScoringModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self, input: &ScoringInput) -> Result<f64, ScoringError> {
        let terrain_offset = self
            .terrain_offsets
            .get(input.terrain_code)
            .copied()
            .ok_or_else(|| {
                ScoringError::Inference(format!("unknown terrain code '{}'", input.terrain_code))
            })?;

        let mut score = self.intercept + terrain_offset;
        score = self.distance_coefficient.mul_add(input.distance_km, score);
        score = self.elevation_coefficient.mul_add(input.elevation_gain_m, score);
        score = self
            .wildlife_coefficient
            .mul_add(input.wildlife_danger_code as f64, score);
        Ok(score)
    }
}

/// Placeholder installed when no model could be loaded
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableScoringModel;

impl ScoringModel for UnavailableScoringModel {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn score(&self, _input: &ScoringInput) -> Result<f64, ScoringError> {
        Err(ScoringError::Unavailable)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_model_loads() {
        let model = LinearScoringModel::bundled().unwrap();
        assert_eq!(model.name(), "trail-risk-linear");
        assert_eq!(model.terrain_offsets.len(), 4);
    }

    #[test]
    fn test_missing_terrain_offset_is_rejected() {
        let json = r#"{"name":"m","version":"1","intercept":0.0,"distance_coefficient":1.0,
            "elevation_coefficient":0.0,"terrain_offsets":{"paved":0.0},"wildlife_coefficient":0.0}"#;
        assert!(matches!(
            LinearScoringModel::from_json(json),
            Err(ScoringError::Load(_))
        ));
    }
}
