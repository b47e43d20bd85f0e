// ABOUTME: Shared test utilities for the analysis pipeline integration tests
// ABOUTME: Provides quiet logging, scripted language model providers, and scoring doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `hike_analyzer`
//!
//! Test doubles for the two external capabilities of the pipeline: the
//! language model and the scoring model.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use hike_analyzer::analysis::{AnalysisOrchestrator, AvailabilityGate, HikingAssistant};
use hike_analyzer::config::AnalysisConfig;
use hike_analyzer::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use hike_core::constants::service_names;
use hike_core::errors::{AppError, AppResult};
use hike_intelligence::{RiskClassifier, ScoringError, ScoringInput, ScoringModel};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Response fixtures
// ============================================================================

/// A response that follows the requested four-section layout exactly
pub const WELL_FORMED_RESPONSE: &str = "RISK EXPLANATION:
This trail combines a long distance with sustained climbing on loose rock. \
The elevation gain is significant for a day hike.

PERSONALIZED RECOMMENDATIONS:
• Start before 8am to finish in daylight
• Carry at least 3 liters of water
• Turn around if weather deteriorates
• Take a break every hour

SAFETY PRIORITIES:
1. Monitor weather conditions closely
2. Stay on the marked trail
3. Tell someone your planned route

GEAR SUGGESTIONS:
• Trekking poles
• Sturdy hiking boots
• Headlamp
";

/// A response with no headers at all
pub const UNSTRUCTURED_RESPONSE: &str = "This hike looks fairly manageable for someone with your background, \
although the final climb is steep and exposed to the afternoon sun.

- Recommend starting early in the morning
- Bring plenty of water and electrolytes
- Wear shoes with good grip for the rocky sections";

// ============================================================================
// Language model doubles
// ============================================================================

/// Provider that answers every request with a fixed text and records the requests
pub struct ScriptedProvider {
    content: String,
    capabilities: LlmCapabilities,
    calls: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            capabilities: LlmCapabilities::text_only(),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_capabilities(mut self, capabilities: LlmCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn display_name(&self) -> &str {
        "Scripted Test Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        Ok(ChatResponse {
            content: self.content.clone(),
            model: "scripted-model".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Provider that fails a fixed number of times before answering
///
/// With `failures = usize::MAX` it never succeeds.
pub struct FailingProvider {
    failures: usize,
    transient: bool,
    content: String,
    calls: AtomicUsize,
}

impl FailingProvider {
    /// Always fails with a transient (retryable) error
    pub fn transient() -> Self {
        Self::flaky(usize::MAX, WELL_FORMED_RESPONSE)
    }

    /// Always fails with a permanent error
    pub fn permanent() -> Self {
        Self {
            failures: usize::MAX,
            transient: false,
            content: String::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails `failures` times with a transient error, then answers with `content`
    pub fn flaky(failures: usize, content: impl Into<String>) -> Self {
        Self {
            failures,
            transient: true,
            content: content.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn display_name(&self) -> &str {
        "Failing Test Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::text_only()
    }

    fn default_model(&self) -> &str {
        "failing-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> AppResult<ChatResponse> {
        let attempt = self.calls.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            return Err(if self.transient {
                AppError::external_unavailable(service_names::LANGUAGE_MODEL, "server busy")
            } else {
                AppError::auth_invalid("bad credentials")
            });
        }
        Ok(ChatResponse {
            content: self.content.clone(),
            model: "failing-model".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(false)
    }
}

/// Provider that sleeps before answering
pub struct SlowProvider {
    delay: Duration,
    calls: AtomicUsize,
}

impl SlowProvider {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for SlowProvider {
    fn name(&self) -> &str {
        "slow"
    }

    fn display_name(&self) -> &str {
        "Slow Test Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::text_only()
    }

    fn default_model(&self) -> &str {
        "slow-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> AppResult<ChatResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(ChatResponse {
            content: WELL_FORMED_RESPONSE.to_owned(),
            model: "slow-model".to_owned(),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

// ============================================================================
// Availability and scoring doubles
// ============================================================================

/// Gate with a fixed answer
pub struct FixedGate(pub bool);

impl AvailabilityGate for FixedGate {
    fn available(&self) -> bool {
        self.0
    }
}

/// Scoring model returning a fixed score and counting invocations
pub struct CountingScoringModel {
    score: Result<f64, ()>,
    calls: AtomicUsize,
}

impl CountingScoringModel {
    pub const fn returning(score: f64) -> Self {
        Self {
            score: Ok(score),
            calls: AtomicUsize::new(0),
        }
    }

    pub const fn failing() -> Self {
        Self {
            score: Err(()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ScoringModel for CountingScoringModel {
    fn name(&self) -> &str {
        "counting"
    }

    fn score(&self, _input: &ScoringInput) -> Result<f64, ScoringError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.score
            .map_err(|()| ScoringError::Inference("scripted failure".to_owned()))
    }
}

// ============================================================================
// Orchestrator setup
// ============================================================================

/// Configuration with short delays suitable for tests
pub fn test_config() -> AnalysisConfig {
    AnalysisConfig::default()
        .with_llm_timeout(Duration::from_secs(5))
        .with_retry_delay(Duration::from_millis(10))
}

/// Orchestrator using the bundled scoring model, an open gate, and the given provider
pub fn orchestrator_with(provider: Arc<dyn LlmProvider>) -> AnalysisOrchestrator {
    init_test_logging();
    let classifier = RiskClassifier::from_model_path(None);
    AnalysisOrchestrator::new(
        classifier,
        Some(provider),
        Arc::new(FixedGate(true)),
        test_config(),
    )
}

/// Hiking assistant with an open gate and the given provider
pub fn assistant_with(provider: Arc<dyn LlmProvider>) -> HikingAssistant {
    init_test_logging();
    HikingAssistant::new(Some(provider), Arc::new(FixedGate(true)), test_config())
}
