// ABOUTME: Lifecycle states of a single analysis request and their legal transitions
// ABOUTME: Records the visited path and why a request ended in a reduced-confidence fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use std::fmt;

use hike_core::constants::fallback;
use hike_core::models::DetailedRiskAnalysis;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Stage of an analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisState {
    /// Not started
    Idle,
    /// Deciding whether language-model enhancement can be attempted
    CheckingAvailability,
    /// Waiting for the language model
    Querying,
    /// Extracting structured fields from the response
    ParsingResponse,
    /// Enhanced analysis assembled
    Complete,
    /// Reduced-confidence analysis assembled
    Fallback,
}

impl AnalysisState {
    /// Whether moving from `self` to `next` is a legal step
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::CheckingAvailability)
                | (Self::CheckingAvailability, Self::Querying | Self::Fallback)
                | (Self::Querying, Self::ParsingResponse | Self::Fallback)
                | (Self::ParsingResponse, Self::Complete)
        )
    }

    /// Whether no further transitions are possible
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Fallback)
    }

    /// Identifier used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::CheckingAvailability => "checking_availability",
            Self::Querying => "querying",
            Self::ParsingResponse => "parsing_response",
            Self::Complete => "complete",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for AnalysisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a request produced a reduced-confidence analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Enhancement disabled, unsupported, or no provider configured
    Unavailable,
    /// The language model call failed after the retry policy ran out
    ModelFailure,
}

impl FallbackReason {
    /// Explanation text placed in the reduced analysis
    #[must_use]
    pub const fn explanation(&self) -> &'static str {
        match self {
            Self::Unavailable => fallback::UNAVAILABLE_EXPLANATION,
            Self::ModelFailure => fallback::MODEL_FAILURE_EXPLANATION,
        }
    }

    /// Whether asking again could produce an enhanced analysis
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ModelFailure)
    }
}

/// Outcome of one orchestrated request
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    /// The assembled analysis
    pub analysis: DetailedRiskAnalysis,
    /// States visited, starting with `Idle`
    pub states: Vec<AnalysisState>,
    /// Set when the analysis is a reduced-confidence fallback
    pub fallback_reason: Option<FallbackReason>,
}

impl AnalysisRun {
    /// Last state reached
    #[must_use]
    pub fn final_state(&self) -> AnalysisState {
        self.states.last().copied().unwrap_or(AnalysisState::Idle)
    }

    /// Whether the request ended in a fallback
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Tracks the current state and the path taken
#[derive(Debug)]
pub(crate) struct StateTracker {
    states: Vec<AnalysisState>,
}

impl StateTracker {
    pub(crate) fn new() -> Self {
        Self {
            states: vec![AnalysisState::Idle],
        }
    }

    pub(crate) fn current(&self) -> AnalysisState {
        self.states.last().copied().unwrap_or(AnalysisState::Idle)
    }

    pub(crate) fn advance(&mut self, next: AnalysisState) {
        let current = self.current();
        if !current.can_transition_to(next) {
            error!(from = %current, to = %next, "Illegal analysis state transition ignored");
            return;
        }
        debug!(from = %current, to = %next, "Analysis state transition");
        self.states.push(next);
    }

    pub(crate) fn into_states(self) -> Vec<AnalysisState> {
        self.states
    }
}
