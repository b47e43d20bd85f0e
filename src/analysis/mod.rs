// ABOUTME: Analysis orchestration for trail risk requests
// ABOUTME: Exposes the orchestrator, the hiking assistant, the availability gate, and lifecycle types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

//! # Analysis Orchestration
//!
//! A request moves `Idle → CheckingAvailability`, then either
//! `Querying → ParsingResponse → Complete` or straight to `Fallback`. The
//! category is always computed first because both the prompt and the reduced
//! analysis need it.
//!
//! The hiking assistant answers single free-form questions with the same
//! availability gate and timeout/retry policy.

mod assistant;
mod availability;
mod orchestrator;
mod retry;
mod state;

pub use assistant::{AssistantReply, HikingAssistant, ReplyOutcome};
pub use availability::{AvailabilityGate, ConfiguredAvailability};
pub use orchestrator::AnalysisOrchestrator;
pub use state::{AnalysisRun, AnalysisState, FallbackReason};
