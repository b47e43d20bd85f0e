// ABOUTME: Analysis settings read from HIKE_* environment variables with documented defaults
// ABOUTME: Controls enhancement, language model timeouts and retries, sampling, and model path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use super::ConfigError;

/// Master switch for language-model enhancement
pub const ENHANCED_ANALYSIS_ENV: &str = "HIKE_ENHANCED_ANALYSIS";
/// Per-attempt language model timeout in seconds
pub const LLM_TIMEOUT_ENV: &str = "HIKE_LLM_TIMEOUT_SECS";
/// Retries on transient language model failure
pub const LLM_MAX_RETRIES_ENV: &str = "HIKE_LLM_MAX_RETRIES";
/// Delay before a retry in milliseconds
pub const LLM_RETRY_DELAY_ENV: &str = "HIKE_LLM_RETRY_DELAY_MS";
/// Sampling temperature
pub const LLM_TEMPERATURE_ENV: &str = "HIKE_LLM_TEMPERATURE";
/// Completion token budget
pub const LLM_MAX_TOKENS_ENV: &str = "HIKE_LLM_MAX_TOKENS";
/// External scoring model file
pub const SCORING_MODEL_PATH_ENV: &str = "HIKE_SCORING_MODEL_PATH";

const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_RETRY_DELAY_MS: u64 = 500;
const DEFAULT_TEMPERATURE: f32 = 0.4;
const DEFAULT_MAX_TOKENS: u32 = 800;

/// Retries are capped so a request makes at most two attempts
pub const MAX_RETRIES_LIMIT: u32 = 1;

/// Settings for one analysis service instance
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Whether language-model enhancement may be attempted at all
    pub enhanced_analysis_enabled: bool,
    /// Budget for a single language model attempt
    pub llm_timeout: Duration,
    /// Retries after a transient failure (at most one)
    pub max_retries: u32,
    /// Delay before retrying
    pub retry_delay: Duration,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Maximum completion tokens
    pub max_tokens: u32,
    /// Scoring model file; the bundled model is used when unset
    pub scoring_model_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            enhanced_analysis_enabled: true,
            llm_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: MAX_RETRIES_LIMIT,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            scoring_model_path: None,
        }
    }
}

impl AnalysisConfig {
    /// Load settings from the environment, falling back to defaults for unset variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable or out-of-range value
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            enhanced_analysis_enabled: env_bool(ENHANCED_ANALYSIS_ENV)?
                .unwrap_or(defaults.enhanced_analysis_enabled),
            llm_timeout: env_parse::<u64>(LLM_TIMEOUT_ENV)?
                .map_or(defaults.llm_timeout, Duration::from_secs),
            max_retries: env_parse::<u32>(LLM_MAX_RETRIES_ENV)?
                .map_or(defaults.max_retries, |retries| retries.min(MAX_RETRIES_LIMIT)),
            retry_delay: env_parse::<u64>(LLM_RETRY_DELAY_ENV)?
                .map_or(defaults.retry_delay, Duration::from_millis),
            temperature: env_parse::<f32>(LLM_TEMPERATURE_ENV)?.unwrap_or(defaults.temperature),
            max_tokens: env_parse::<u32>(LLM_MAX_TOKENS_ENV)?.unwrap_or(defaults.max_tokens),
            scoring_model_path: env::var(SCORING_MODEL_PATH_ENV)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        config.validate()?;
        debug!(?config, "Analysis configuration loaded");
        Ok(config)
    }

    /// Check that every value lies in its accepted range
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` naming the first offending setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm_timeout.is_zero() {
            return Err(ConfigError::ValueOutOfRange(
                "HIKE_LLM_TIMEOUT_SECS must be greater than 0",
            ));
        }
        if self.max_retries > MAX_RETRIES_LIMIT {
            return Err(ConfigError::ValueOutOfRange(
                "HIKE_LLM_MAX_RETRIES must be 0 or 1",
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::ValueOutOfRange(
                "HIKE_LLM_TEMPERATURE must be between 0.0 and 2.0",
            ));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "HIKE_LLM_MAX_TOKENS must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Enable or disable language-model enhancement
    #[must_use]
    pub const fn with_enhanced_analysis(mut self, enabled: bool) -> Self {
        self.enhanced_analysis_enabled = enabled;
        self
    }

    /// Set the per-attempt timeout
    #[must_use]
    pub const fn with_llm_timeout(mut self, timeout: Duration) -> Self {
        self.llm_timeout = timeout;
        self
    }

    /// Set the retry count, capped at one
    #[must_use]
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries.min(MAX_RETRIES_LIMIT);
        self
    }

    /// Set the delay before a retry
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion token budget
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Use an external scoring model file
    #[must_use]
    pub fn with_scoring_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scoring_model_path = Some(path.into());
        self
    }
}

fn env_parse<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("{key}: invalid value '{value}'"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

fn env_bool(key: &'static str) -> Result<Option<bool>, ConfigError> {
    match env::var(key) {
        Ok(value) => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::Parse(format!("{key}: invalid boolean '{value}'"))),
        },
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
