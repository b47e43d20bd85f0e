// ABOUTME: Core types and constants for the hike analyzer workspace
// ABOUTME: Foundation crate with error handling, trail/risk models, and canned analysis text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

#![deny(unsafe_code)]

//! # Hike Core
//!
//! Foundation crate providing shared types and constants for hiking trail
//! risk analysis. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Trail parameters, user profiles, risk categories, and analysis records
//! - **constants**: Section headers and canned fallback text shared across crates

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (trail parameters, user profile, risk category, analysis)
pub mod models;
