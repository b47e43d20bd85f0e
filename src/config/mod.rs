// ABOUTME: Configuration module for the analysis service
// ABOUTME: Exposes environment-driven analysis settings and their error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

//! Configuration for the hike analyzer
//!
//! All settings are read once at startup and passed to the orchestrator at
//! construction. Nothing here is consulted as global state afterwards.

/// Analysis settings loaded from the environment
pub mod environment;
mod error;

pub use environment::AnalysisConfig;
pub use error::ConfigError;
