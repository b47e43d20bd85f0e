// ABOUTME: Prompt construction for enhanced trail analysis requests
// ABOUTME: Builds the advisor persona instruction and the per-trail analysis query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

//! # Analysis Prompts
//!
//! The system instruction asks for four headed sections. The header names are
//! the same constants the narrative extractors look up first, so a model that
//! follows the format is parsed by the primary aliases.

use hike_core::constants::sections;
use hike_core::models::{RiskCategory, TrailParameters, UserProfile};

/// Build the persona instruction for a hiker profile
#[must_use]
pub fn build_system_instruction(profile: &UserProfile) -> String {
    format!(
        "You are an expert hiking safety advisor and risk assessment specialist. \
Your role is to analyze trail conditions and provide detailed, actionable safety guidance.

User Experience Level: {experience}
Fitness Level: {fitness}
Previous Hiking Experience: {history}

Provide analysis in this exact format:

{explanation}:
[2-3 sentences explaining why this specific risk level was assigned based on the trail parameters]

{recommendations}:
• [4-6 specific, actionable recommendations tailored to this user's experience level]

{priorities}:
1. [Most critical safety consideration]
2. [Second most important safety factor]
3. [Third priority safety item]

{gear}:
• [3-4 essential gear items specific to these trail conditions]

Keep recommendations practical, specific, and appropriate for the user's experience level. \
Focus on safety without being overly cautious.",
        experience = profile.experience_level.description(),
        fitness = profile.fitness_level.description(),
        history = profile.experience_description,
        explanation = sections::RISK_EXPLANATION,
        recommendations = sections::PERSONALIZED_RECOMMENDATIONS,
        priorities = sections::SAFETY_PRIORITIES,
        gear = sections::GEAR_SUGGESTIONS,
    )
}

/// Build the analysis query for one trail and its classified category
///
/// Missing distance or elevation is rendered as `0`.
#[must_use]
pub fn build_analysis_query(params: &TrailParameters, category: RiskCategory) -> String {
    let distance = params.distance_km.unwrap_or(0.0);
    let elevation = params.elevation_gain_m.unwrap_or(0.0);

    format!(
        "Analyze this hiking trail and provide detailed safety guidance:

Trail Details:
- Distance: {distance} kilometers
- Elevation Gain: {elevation} meters
- Terrain Type: {terrain}
- Wildlife Danger Level: {wildlife}
- Risk Prediction: {label}

Please provide comprehensive analysis following the format specified in your system prompt.",
        terrain = params.terrain.description(),
        wildlife = params.wildlife_danger.description(),
        label = category.label(),
    )
}
