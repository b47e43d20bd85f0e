// ABOUTME: Sequences classification, availability, language model query, and narrative parsing
// ABOUTME: Always returns a displayable analysis, degrading to a reduced one on any failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use std::fmt;
use std::sync::Arc;

use hike_core::models::{DetailedRiskAnalysis, RiskCategory, TrailParameters, UserProfile};
use hike_intelligence::{extract_narrative, RiskClassifier};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::availability::{AvailabilityGate, ConfiguredAvailability};
use super::retry::complete_with_retry;
use super::state::{AnalysisRun, AnalysisState, FallbackReason, StateTracker};
use crate::config::AnalysisConfig;
use crate::llm::{build_analysis_query, build_system_instruction, ChatRequest, LlmProvider};

/// Runs the analysis pipeline for independent requests
///
/// Holds only read-only collaborators, so one instance can serve concurrent
/// requests. Dropping an in-flight `analyze` future abandons that request
/// without side effects.
pub struct AnalysisOrchestrator {
    classifier: RiskClassifier,
    provider: Option<Arc<dyn LlmProvider>>,
    gate: Arc<dyn AvailabilityGate>,
    config: AnalysisConfig,
}

impl fmt::Debug for AnalysisOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOrchestrator")
            .field("classifier", &self.classifier)
            .field("provider", &self.provider.as_ref().map(|p| p.name().to_owned()))
            .field("gate_open", &self.gate.available())
            .field("config", &self.config)
            .finish()
    }
}

impl AnalysisOrchestrator {
    /// Create an orchestrator from explicit collaborators
    #[must_use]
    pub fn new(
        classifier: RiskClassifier,
        provider: Option<Arc<dyn LlmProvider>>,
        gate: Arc<dyn AvailabilityGate>,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            classifier,
            provider,
            gate,
            config,
        }
    }

    /// Create an orchestrator whose classifier and gate are derived from configuration
    #[must_use]
    pub fn from_config(config: AnalysisConfig, provider: Option<Arc<dyn LlmProvider>>) -> Self {
        let classifier = RiskClassifier::from_model_path(config.scoring_model_path.as_deref());
        let gate =
            ConfiguredAvailability::new(config.enhanced_analysis_enabled, provider.as_deref());
        Self::new(classifier, provider, Arc::new(gate), config)
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Classifier in use
    #[must_use]
    pub const fn classifier(&self) -> &RiskClassifier {
        &self.classifier
    }

    /// Analyze a trail, substituting the default profile when none is given
    pub async fn analyze(
        &self,
        params: &TrailParameters,
        profile: Option<&UserProfile>,
    ) -> DetailedRiskAnalysis {
        self.run(params, profile).await.analysis
    }

    /// Analyze a trail and report the states visited and any fallback reason
    #[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn run(
        &self,
        params: &TrailParameters,
        profile: Option<&UserProfile>,
    ) -> AnalysisRun {
        let mut tracker = StateTracker::new();
        let category = self.classifier.classify(params);

        tracker.advance(AnalysisState::CheckingAvailability);
        let provider = match &self.provider {
            Some(provider) if self.gate.available() => Arc::clone(provider),
            _ => {
                info!(
                    category = %category,
                    "Enhanced analysis unavailable, using reduced analysis"
                );
                return Self::fallback(tracker, category, FallbackReason::Unavailable);
            }
        };

        tracker.advance(AnalysisState::Querying);
        let profile = profile.cloned().unwrap_or_default();
        let request = self.build_request(params, &profile, category);

        let response = match complete_with_retry(provider.as_ref(), &request, &self.config).await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    error = %e,
                    provider = provider.name(),
                    "Language model call failed, using reduced analysis"
                );
                return Self::fallback(tracker, category, FallbackReason::ModelFailure);
            }
        };

        tracker.advance(AnalysisState::ParsingResponse);
        let fields = extract_narrative(&response.content, category);

        tracker.advance(AnalysisState::Complete);
        info!(category = %category, model = %response.model, "Enhanced analysis complete");
        AnalysisRun {
            analysis: DetailedRiskAnalysis::enhanced(category, fields),
            states: tracker.into_states(),
            fallback_reason: None,
        }
    }

    fn build_request(
        &self,
        params: &TrailParameters,
        profile: &UserProfile,
        category: RiskCategory,
    ) -> ChatRequest {
        ChatRequest::system_and_user(
            build_system_instruction(profile),
            build_analysis_query(params, category),
        )
        .with_temperature(self.config.temperature)
        .with_max_tokens(self.config.max_tokens)
    }

    fn fallback(
        mut tracker: StateTracker,
        category: RiskCategory,
        reason: FallbackReason,
    ) -> AnalysisRun {
        tracker.advance(AnalysisState::Fallback);
        AnalysisRun {
            analysis: DetailedRiskAnalysis::reduced(category, reason.explanation()),
            states: tracker.into_states(),
            fallback_reason: Some(reason),
        }
    }
}
