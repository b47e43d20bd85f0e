// ABOUTME: Application constants shared between prompt building, parsing, and fallback assembly
// ABOUTME: Groups section header vocabulary, analysis limits, and canned user-facing text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

//! Application constants organized by domain

/// Section header vocabulary requested from the language model and parsed back
pub mod sections {
    /// Narrative explanation of the assigned category
    pub const RISK_EXPLANATION: &str = "RISK EXPLANATION";
    /// Bulleted recommendations tailored to the hiker
    pub const PERSONALIZED_RECOMMENDATIONS: &str = "PERSONALIZED RECOMMENDATIONS";
    /// Numbered safety priorities
    pub const SAFETY_PRIORITIES: &str = "SAFETY PRIORITIES";
    /// Bulleted gear suggestions
    pub const GEAR_SUGGESTIONS: &str = "GEAR SUGGESTIONS";
}

/// Limits applied to extracted narrative content
pub mod limits {
    /// Maximum number of items kept in any extracted list
    pub const MAX_LIST_ITEMS: usize = 6;
    /// A keyword-scan line must be longer than this many characters
    pub const MIN_KEYWORD_LINE_CHARS: usize = 20;
    /// A free-standing paragraph must be longer than this to serve as an explanation
    pub const MIN_EXPLANATION_PARAGRAPH_CHARS: usize = 50;
}

/// Placeholders used when a list could not be recovered from generated text
pub mod placeholders {
    /// Recommendations could not be parsed
    pub const RECOMMENDATIONS: &str =
        "Analysis complete - specific recommendations could not be parsed";
    /// Safety priorities could not be parsed
    pub const SAFETY_PRIORITIES: &str = "General safety precautions apply";
    /// Gear suggestions could not be parsed
    pub const GEAR: &str = "Standard hiking gear recommended";
}

/// Text used for reduced-confidence analyses produced without a language model
pub mod fallback {
    /// Explanation when enhanced analysis is switched off or unsupported
    pub const UNAVAILABLE_EXPLANATION: &str = "Enhanced analysis requires a supported language model, which is not available in this configuration. Enable a language model provider for personalized recommendations and detailed safety guidance.";
    /// Explanation when the language model call failed
    pub const MODEL_FAILURE_EXPLANATION: &str = "Enhanced analysis could not be completed because the language model did not return a usable response. Please try again for personalized recommendations and detailed safety guidance.";
    /// Recommendations placeholder for reduced analyses
    pub const RECOMMENDATIONS: &str = "Personalized recommendations require enhanced analysis";
    /// Safety priorities placeholder for reduced analyses
    pub const SAFETY_PRIORITIES: &str = "Detailed safety analysis requires enhanced analysis";
    /// Gear placeholder for reduced analyses
    pub const GEAR: &str = "Gear recommendations require enhanced analysis";
}

/// Persona and canned replies of the single-question hiking assistant
pub mod assistant {
    /// System instruction sent with every question
    pub const PERSONA: &str = "You are an expert hiking assistant. Provide helpful, accurate, and context-aware responses to user questions about hiking, trail safety, gear recommendations, weather considerations, and risk assessment.";
    /// Greeting when a language model is available
    pub const WELCOME_AVAILABLE: &str = "Hi! I'm your AI hiking assistant. I can help you with trail planning, safety tips, gear recommendations, and answer any hiking-related questions you might have. How can I assist you today?";
    /// Greeting when no language model can be used
    pub const WELCOME_UNAVAILABLE: &str = "Hi! The AI hiking assistant requires a supported language model, which is not available in this configuration.";
    /// Reply when the language model call failed
    pub const CONNECTION_FAILED: &str =
        "I'm having trouble connecting to the AI service right now. Please try again.";
    /// Reply when no language model can be used
    pub const NOT_SUPPORTED: &str = "The AI hiking assistant requires a supported language model, which is not available in this configuration.";
}

/// Service identifiers used in logging and error messages
pub mod service_names {
    /// Binary and logging service name
    pub const HIKE_ANALYZER: &str = "hike-analyzer";
    /// Label used for errors raised by language model providers
    pub const LANGUAGE_MODEL: &str = "LanguageModel";
}
