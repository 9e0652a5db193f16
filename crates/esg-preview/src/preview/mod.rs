//! Client-side ESG scoring preview and disclosure completeness.
//!
//! Both computations are pure: they read a [`SupplierMetrics`] snapshot and return a
//! freshly derived result, so callers can recompute on every edit without coordination.

mod completeness;
mod explanation;
mod factors;
mod import;
mod metrics;
mod router;
mod scorer;
mod weights;

pub use completeness::{
    estimate_completeness, CompletenessResult, KeyMetric, CAPPED_SCORE, CAP_WARNING_RATIO,
};
pub use explanation::NEUTRAL_EXPLANATION;
pub use factors::{ContributingFactor, MAX_LISTED_FACTORS, POSITIVE_THRESHOLD};
pub use import::{
    BatchImportError, BatchPreviewImporter, BatchPreviewReport, BatchPreviewRow, BatchSummary,
    DEFAULT_ROW_LIMIT,
};
pub use metrics::{MetricValue, SupplierMetrics};
pub use router::{preview_router, BatchPreviewRequest};
pub use scorer::{round2, RiskLevel};
pub use weights::{MetricKey, MetricWeight, Pillar, PillarWeights, PILLAR_WEIGHTS};

use serde::{Deserialize, Serialize};

/// Preview of what the authoritative scorer is expected to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePreviewResult {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
    pub overall: f64,
    pub risk_level: RiskLevel,
    pub top_positive: Vec<ContributingFactor>,
    pub top_negative: Vec<ContributingFactor>,
    pub explanation_text: String,
}

/// Score preview together with the completeness estimate for the same record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierPreview {
    pub score: ScorePreviewResult,
    pub completeness: CompletenessResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_warning: Option<String>,
}

pub fn score_preview(metrics: &SupplierMetrics) -> ScorePreviewResult {
    let scores = scorer::score_pillars(metrics);
    let risk_level = RiskLevel::from_score(scores.overall);

    let factors = factors::contributing_factors(metrics);
    let (top_positive, top_negative) = factors::rank_factors(&factors);
    let explanation_text =
        explanation::explain(&scores, risk_level, &top_positive, &top_negative);

    ScorePreviewResult {
        environmental: scores.environmental,
        social: scores.social,
        governance: scores.governance,
        overall: scores.overall,
        risk_level,
        top_positive,
        top_negative,
        explanation_text,
    }
}

/// Stateless evaluator shared by the HTTP layer, the registry and batch imports.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewEngine;

impl PreviewEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, metrics: &SupplierMetrics) -> ScorePreviewResult {
        score_preview(metrics)
    }

    pub fn completeness(&self, metrics: &SupplierMetrics) -> CompletenessResult {
        estimate_completeness(metrics)
    }

    pub fn preview(&self, metrics: &SupplierMetrics) -> SupplierPreview {
        let completeness = self.completeness(metrics);
        let cap_warning = completeness.cap_warning();
        SupplierPreview {
            score: self.score(metrics),
            completeness,
            cap_warning,
        }
    }
}
