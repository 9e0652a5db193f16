use serde::{Deserialize, Serialize};

use super::metrics::SupplierMetrics;
use super::weights::{MetricKey, Pillar, PILLAR_WEIGHTS};

/// Normalized values above this mark count as strengths regardless of pillar.
pub const POSITIVE_THRESHOLD: f64 = 0.6;
pub const MAX_LISTED_FACTORS: usize = 3;

/// A weighted metric and what it adds to the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributingFactor {
    pub metric: MetricKey,
    pub label: String,
    pub pillar: Pillar,
    pub value: f64,
    pub effective_weight: f64,
    pub impact: f64,
    pub is_positive: bool,
    pub is_risk: bool,
}

pub(crate) fn contributing_factors(metrics: &SupplierMetrics) -> Vec<ContributingFactor> {
    PILLAR_WEIGHTS
        .iter()
        .flat_map(|table| {
            table.metrics.iter().map(move |metric| {
                let value = metric.key.normalized(metrics);
                let effective_weight = metric.weight * table.overall_weight;
                ContributingFactor {
                    metric: metric.key,
                    label: metric.key.label().to_string(),
                    pillar: table.pillar,
                    value,
                    effective_weight,
                    impact: value * effective_weight,
                    is_positive: value > POSITIVE_THRESHOLD,
                    is_risk: metric.key.is_risk(),
                }
            })
        })
        .collect()
}

/// Splits factors into the strongest positives and the weakest of the rest.
pub(crate) fn rank_factors(
    factors: &[ContributingFactor],
) -> (Vec<ContributingFactor>, Vec<ContributingFactor>) {
    let mut positive: Vec<ContributingFactor> = factors
        .iter()
        .filter(|factor| factor.is_positive)
        .cloned()
        .collect();
    positive.sort_by(|a, b| b.impact.total_cmp(&a.impact));
    positive.truncate(MAX_LISTED_FACTORS);

    let mut negative: Vec<ContributingFactor> = factors
        .iter()
        .filter(|factor| !factor.is_positive)
        .cloned()
        .collect();
    negative.sort_by(|a, b| a.impact.total_cmp(&b.impact));
    negative.truncate(MAX_LISTED_FACTORS);

    (positive, negative)
}
