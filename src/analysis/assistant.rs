// ABOUTME: Single-question hiking assistant answering free-form questions under a fixed persona
// ABOUTME: Shares the availability gate and timeout/retry policy with trail analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use std::fmt;
use std::sync::Arc;

use hike_core::constants::assistant;
use hike_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::availability::{AvailabilityGate, ConfiguredAvailability};
use super::retry::complete_with_retry;
use crate::config::AnalysisConfig;
use crate::llm::{ChatRequest, LlmProvider};

/// How a question was answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyOutcome {
    /// The language model produced the reply
    Answered,
    /// No language model can be used; the reply is canned
    Unsupported,
    /// The language model call failed; the reply is canned
    Failed,
}

/// Reply to one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    /// Text shown to the user
    pub content: String,
    /// Where the text came from
    pub outcome: ReplyOutcome,
}

impl AssistantReply {
    fn canned(content: &str, outcome: ReplyOutcome) -> Self {
        Self {
            content: content.to_owned(),
            outcome,
        }
    }
}

/// Answers one hiking question per call; keeps no conversation history
pub struct HikingAssistant {
    provider: Option<Arc<dyn LlmProvider>>,
    gate: Arc<dyn AvailabilityGate>,
    config: AnalysisConfig,
}

impl fmt::Debug for HikingAssistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HikingAssistant")
            .field("provider", &self.provider.as_ref().map(|p| p.name().to_owned()))
            .field("gate_open", &self.gate.available())
            .field("config", &self.config)
            .finish()
    }
}

impl HikingAssistant {
    /// Create an assistant from explicit collaborators
    #[must_use]
    pub fn new(
        provider: Option<Arc<dyn LlmProvider>>,
        gate: Arc<dyn AvailabilityGate>,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            provider,
            gate,
            config,
        }
    }

    /// Create an assistant whose gate is derived from configuration
    #[must_use]
    pub fn from_config(config: AnalysisConfig, provider: Option<Arc<dyn LlmProvider>>) -> Self {
        let gate =
            ConfiguredAvailability::new(config.enhanced_analysis_enabled, provider.as_deref());
        Self::new(provider, Arc::new(gate), config)
    }

    /// Greeting matching current availability
    #[must_use]
    pub fn welcome_message(&self) -> &'static str {
        if self.usable_provider().is_some() {
            assistant::WELCOME_AVAILABLE
        } else {
            assistant::WELCOME_UNAVAILABLE
        }
    }

    /// Answer a question
    ///
    /// Model failures never surface as errors; they produce a canned reply
    /// with `ReplyOutcome::Failed`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the question is blank
    #[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn respond(&self, question: &str) -> AppResult<AssistantReply> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AppError::invalid_input("Question must not be empty"));
        }

        let Some(provider) = self.usable_provider() else {
            info!("Assistant unavailable, returning canned reply");
            return Ok(AssistantReply::canned(
                assistant::NOT_SUPPORTED,
                ReplyOutcome::Unsupported,
            ));
        };

        let request = ChatRequest::system_and_user(assistant::PERSONA, question)
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);

        match complete_with_retry(provider.as_ref(), &request, &self.config).await {
            Ok(response) if !response.content.trim().is_empty() => {
                info!(model = %response.model, "Assistant answered");
                Ok(AssistantReply {
                    content: response.content.trim().to_owned(),
                    outcome: ReplyOutcome::Answered,
                })
            }
            Ok(_) => {
                warn!(provider = provider.name(), "Assistant received an empty reply");
                Ok(AssistantReply::canned(
                    assistant::CONNECTION_FAILED,
                    ReplyOutcome::Failed,
                ))
            }
            Err(e) => {
                warn!(error = %e, provider = provider.name(), "Assistant call failed");
                Ok(AssistantReply::canned(
                    assistant::CONNECTION_FAILED,
                    ReplyOutcome::Failed,
                ))
            }
        }
    }

    fn usable_provider(&self) -> Option<&Arc<dyn LlmProvider>> {
        self.provider.as_ref().filter(|_| self.gate.available())
    }
}
