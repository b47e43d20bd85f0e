// ABOUTME: Core data models for trail risk analysis
// ABOUTME: Re-exports trail parameters, user profiles, risk categories, findings, and analysis records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

//! Domain models shared by the intelligence crate and the analysis service.

mod analysis;
mod profile;
mod risk;
mod trail;
mod validation;

pub use analysis::{DetailedRiskAnalysis, NarrativeFields};
pub use profile::{ExperienceLevel, FitnessLevel, UserProfile};
pub use risk::RiskCategory;
pub use trail::{Terrain, TrailParameters, WildlifeDanger};
pub use validation::ValidationFinding;
