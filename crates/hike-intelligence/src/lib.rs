// ABOUTME: Trail risk intelligence crate for classification and narrative extraction
// ABOUTME: Validates trail input, scores it, buckets the score, and mines generated text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

#![deny(unsafe_code)]

//! # Hike Intelligence
//!
//! Synchronous, deterministic building blocks of the analysis pipeline:
//!
//! - **validation**: range checks on trail parameters that never fail
//! - **scoring**: the pretrained scoring model capability and its JSON-backed implementation
//! - **classifier**: score bucketing with a fail-safe `HighRisk` default
//! - **narrative**: section parsing plus list and explanation extraction from free text

/// Input validation for trail parameters
pub mod validation;

/// Scoring model capability and implementations
pub mod scoring;

/// Risk classification from trail parameters
pub mod classifier;

/// Narrative extraction from generated text
pub mod narrative;

pub use classifier::{category_for_score, RiskClassifier};
pub use narrative::{extract_narrative, ListConcept, SectionMap};
pub use scoring::{
    LinearScoringModel, ScoringError, ScoringInput, ScoringModel, UnavailableScoringModel,
};
pub use validation::{is_valid_for_analysis, validate, validation_summary};
