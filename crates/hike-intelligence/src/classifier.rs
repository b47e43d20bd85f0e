// ABOUTME: Deterministic risk classification from trail parameters through a scoring model
// ABOUTME: Buckets continuous scores into categories and fails safe to HighRisk on any problem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hike Analyzer Contributors

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use hike_core::models::{RiskCategory, TrailParameters};
use tracing::{debug, warn};

use crate::scoring::{LinearScoringModel, ScoringInput, ScoringModel, UnavailableScoringModel};

/// Upper bound (exclusive) of the `Easy` bucket
const EASY_UPPER: f64 = 20.0;
/// Upper bound (exclusive) of the `Moderate` bucket
const MODERATE_UPPER: f64 = 50.0;
/// Upper bound (inclusive) of the `Difficult` bucket
const DIFFICULT_UPPER: f64 = 100.0;

/// Map a continuous score to a category
///
/// `[0, 20)` is `Easy`, `[20, 50)` is `Moderate` and `[50, 100]` is
/// `Difficult`. Anything else, including negative scores and NaN, is
/// `HighRisk`.
#[must_use]
pub fn category_for_score(score: f64) -> RiskCategory {
    if (0.0..EASY_UPPER).contains(&score) {
        RiskCategory::Easy
    } else if (EASY_UPPER..MODERATE_UPPER).contains(&score) {
        RiskCategory::Moderate
    } else if (MODERATE_UPPER..=DIFFICULT_UPPER).contains(&score) {
        RiskCategory::Difficult
    } else {
        RiskCategory::HighRisk
    }
}

/// Classifies trails using an injected scoring model
#[derive(Clone)]
pub struct RiskClassifier {
    model: Arc<dyn ScoringModel>,
}

impl fmt::Debug for RiskClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiskClassifier")
            .field("model", &self.model.name())
            .finish()
    }
}

impl RiskClassifier {
    /// Create a classifier around a scoring model
    #[must_use]
    pub fn new(model: Arc<dyn ScoringModel>) -> Self {
        Self { model }
    }

    /// Load a model from `path`, or the bundled model when no path is given
    ///
    /// A model that fails to load is replaced by [`UnavailableScoringModel`],
    /// so every subsequent classification returns `HighRisk`.
    #[must_use]
    pub fn from_model_path(path: Option<&Path>) -> Self {
        let loaded = path.map_or_else(LinearScoringModel::bundled, LinearScoringModel::from_file);

        match loaded {
            Ok(model) => {
                debug!(model = %model.name, version = %model.version, "Scoring model loaded");
                Self::new(Arc::new(model))
            }
            Err(e) => {
                warn!(error = %e, "Scoring model could not be loaded, classification will fail safe");
                Self::new(Arc::new(UnavailableScoringModel))
            }
        }
    }

    /// Name of the installed scoring model
    #[must_use]
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Classify trail parameters
    ///
    /// Missing distance or elevation yields `HighRisk` without consulting the
    /// model. Scoring failures are logged and also yield `HighRisk`.
    #[must_use]
    pub fn classify(&self, params: &TrailParameters) -> RiskCategory {
        let Some(input) = ScoringInput::from_parameters(params) else {
            debug!("Trail measurements missing, classifying as high risk");
            return RiskCategory::HighRisk;
        };

        match self.model.score(&input) {
            Ok(score) => {
                let category = category_for_score(score);
                debug!(score, category = %category, "Trail classified");
                category
            }
            Err(e) => {
                warn!(model = self.model.name(), error = %e, "Scoring failed, classifying as high risk");
                RiskCategory::HighRisk
            }
        }
    }
}
