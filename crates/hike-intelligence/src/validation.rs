// ABOUTME: Range and presence checks for trail parameters ahead of classification
// ABOUTME: Collects every applicable finding, distance before elevation, without failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use hike_core::models::{TrailParameters, ValidationFinding};

/// Distances above this are accepted but flagged for confirmation
pub const MAX_PLAUSIBLE_DISTANCE_KM: f64 = 100.0;

/// Elevation gains above this are accepted but flagged for confirmation
pub const MAX_PLAUSIBLE_ELEVATION_M: f64 = 5000.0;

/// Validate trail parameters
///
/// Returns all findings that apply. An empty vector means the input is
/// acceptable; plausibility findings (very long or very steep hikes) are
/// advisory and still appear here.
#[must_use]
pub fn validate(params: &TrailParameters) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    match params.distance_km {
        None => findings.push(ValidationFinding::MissingDistance),
        Some(distance) if distance.is_nan() || distance <= 0.0 => {
            findings.push(ValidationFinding::InvalidDistance(
                "Distance must be greater than 0 km".to_owned(),
            ));
        }
        Some(distance) if distance > MAX_PLAUSIBLE_DISTANCE_KM => {
            findings.push(ValidationFinding::InvalidDistance(
                "Distance seems unusually high. Please verify.".to_owned(),
            ));
        }
        Some(_) => {}
    }

    match params.elevation_gain_m {
        None => findings.push(ValidationFinding::MissingElevation),
        Some(elevation) if elevation.is_nan() || elevation < 0.0 => {
            findings.push(ValidationFinding::InvalidElevation(
                "Elevation gain cannot be negative".to_owned(),
            ));
        }
        Some(elevation) if elevation > MAX_PLAUSIBLE_ELEVATION_M => {
            findings.push(ValidationFinding::InvalidElevation(
                "Elevation gain seems unusually high. Please verify.".to_owned(),
            ));
        }
        Some(_) => {}
    }

    findings
}

/// Whether the parameters produce no findings at all
#[must_use]
pub fn is_valid_for_analysis(params: &TrailParameters) -> bool {
    validate(params).is_empty()
}

/// Join finding messages into one newline-separated summary
#[must_use]
pub fn validation_summary(findings: &[ValidationFinding]) -> Option<String> {
    if findings.is_empty() {
        return None;
    }
    Some(
        findings
            .iter()
            .map(ValidationFinding::message)
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
