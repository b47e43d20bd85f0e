// ABOUTME: Main library entry point for the hiking trail risk analyzer
// ABOUTME: Wires configuration, logging, language model access, and analysis orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

#![deny(unsafe_code)]

//! # Hike Analyzer
//!
//! Assesses hiking-trail risk from trail parameters and optionally enriches
//! the assessment with guidance generated by a language model.
//!
//! ## Architecture
//!
//! - **`hike_core`**: errors, domain models, canned text
//! - **`hike_intelligence`**: validation, scoring, classification, narrative extraction
//! - **config**: environment-driven analysis settings
//! - **llm**: provider abstraction, `OpenAI`-compatible client, prompt builder
//! - **analysis**: the orchestrator, the single-question hiking assistant, and the availability gate
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use hike_analyzer::analysis::AnalysisOrchestrator;
//! use hike_analyzer::config::AnalysisConfig;
//! use hike_analyzer::llm::{LlmProvider, OpenAiCompatibleProvider};
//! use hike_core::models::{Terrain, TrailParameters, WildlifeDanger};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AnalysisConfig::from_env()?;
//!     let provider: Arc<dyn LlmProvider> = Arc::new(OpenAiCompatibleProvider::from_env()?);
//!     let orchestrator = AnalysisOrchestrator::from_config(config, Some(provider));
//!
//!     let trail = TrailParameters::new(12.0, 650.0, Terrain::Rocky, WildlifeDanger::Low);
//!     let analysis = orchestrator.analyze(&trail, None).await;
//!     println!("{}: {}", analysis.category(), analysis.explanation());
//!     Ok(())
//! }
//! ```

/// Analysis orchestration and availability gating
pub mod analysis;

/// Environment-driven configuration
pub mod config;

/// Language model provider abstraction and prompts
pub mod llm;

/// Structured logging setup
pub mod logging;

pub use hike_core::errors::{AppError, AppResult, ErrorCode};
pub use hike_core::models;
