// ABOUTME: Decides whether language-model enhancement can be attempted for a request
// ABOUTME: Combines the configured switch with provider presence and capabilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use crate::llm::{LlmCapabilities, LlmProvider};

/// Capability check consulted before every enhanced analysis
pub trait AvailabilityGate: Send + Sync {
    /// Whether enhancement may be attempted now
    fn available(&self) -> bool;
}

/// Gate derived from configuration and the constructed provider
///
/// Open only when enhancement is enabled, a provider exists, and that
/// provider accepts system messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfiguredAvailability {
    enabled: bool,
    capabilities: Option<LlmCapabilities>,
}

impl ConfiguredAvailability {
    /// Build the gate from the enhancement switch and an optional provider
    #[must_use]
    pub fn new(enabled: bool, provider: Option<&dyn LlmProvider>) -> Self {
        Self {
            enabled,
            capabilities: provider.map(LlmProvider::capabilities),
        }
    }

    /// Build the gate from explicit capabilities
    #[must_use]
    pub const fn from_capabilities(enabled: bool, capabilities: Option<LlmCapabilities>) -> Self {
        Self {
            enabled,
            capabilities,
        }
    }
}

impl AvailabilityGate for ConfiguredAvailability {
    fn available(&self) -> bool {
        self.enabled
            && self
                .capabilities
                .is_some_and(|capabilities| capabilities.supports_system_messages())
    }
}
