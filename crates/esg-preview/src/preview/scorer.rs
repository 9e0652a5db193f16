use serde::{Deserialize, Serialize};

use super::metrics::SupplierMetrics;
use super::weights::{Pillar, PILLAR_WEIGHTS};

/// Discrete risk tier derived from the overall preview score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Bands are inclusive on their lower bound.
    pub fn from_score(overall: f64) -> Self {
        if overall >= 0.75 {
            RiskLevel::Low
        } else if overall >= 0.50 {
            RiskLevel::Medium
        } else if overall >= 0.25 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

/// Rounded pillar and overall scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PillarScores {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
    pub overall: f64,
}

impl PillarScores {
    pub fn get(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Environmental => self.environmental,
            Pillar::Social => self.social,
            Pillar::Governance => self.governance,
        }
    }
}

/// Two-decimal rounding with half-up behaviour, applied once per final sum.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

fn raw_pillar(pillar: Pillar, metrics: &SupplierMetrics) -> f64 {
    pillar
        .weights()
        .metrics
        .iter()
        .map(|metric| metric.key.normalized(metrics) * metric.weight)
        .sum()
}

pub(crate) fn score_pillars(metrics: &SupplierMetrics) -> PillarScores {
    let environmental = raw_pillar(Pillar::Environmental, metrics);
    let social = raw_pillar(Pillar::Social, metrics);
    let governance = raw_pillar(Pillar::Governance, metrics);

    let overall = PILLAR_WEIGHTS
        .iter()
        .map(|table| {
            let raw = match table.pillar {
                Pillar::Environmental => environmental,
                Pillar::Social => social,
                Pillar::Governance => governance,
            };
            raw * table.overall_weight
        })
        .sum::<f64>();

    PillarScores {
        environmental: round2(environmental),
        social: round2(social),
        governance: round2(governance),
        overall: round2(overall),
    }
}
