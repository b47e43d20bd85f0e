// ABOUTME: Timeout-bounded language model call with a single retry on transient failures
// ABOUTME: Shared by trail analysis and the hiking assistant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use hike_core::constants::service_names;
use hike_core::errors::{AppError, AppResult};
use tokio::time::{sleep, timeout};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::llm::{ChatRequest, ChatResponse, LlmProvider};

/// Call the provider under the configured timeout, retrying transient failures
///
/// # Errors
///
/// Returns the last error once the attempts are used up, or the first
/// non-transient error immediately
pub(super) async fn complete_with_retry(
    provider: &dyn LlmProvider,
    request: &ChatRequest,
    config: &AnalysisConfig,
) -> AppResult<ChatResponse> {
    let attempts = config.max_retries.saturating_add(1);
    let mut attempt = 1;

    loop {
        let error = match timeout(config.llm_timeout, provider.complete(request)).await {
            Ok(Ok(response)) => return Ok(response),
            Ok(Err(e)) => e,
            Err(_) => AppError::external_timeout(
                service_names::LANGUAGE_MODEL,
                format!(
                    "No response within {} seconds",
                    config.llm_timeout.as_secs_f64()
                ),
            ),
        };

        if attempt >= attempts || !error.is_transient() {
            return Err(error);
        }

        debug!(
            attempt,
            error = %error,
            delay_ms = config.retry_delay.as_millis() as u64,
            "Transient language model failure, retrying"
        );
        sleep(config.retry_delay).await;
        attempt += 1;
    }
}
