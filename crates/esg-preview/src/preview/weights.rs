use serde::{Deserialize, Serialize};

use super::metrics::{number, SupplierMetrics};

/// The three ESG pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Environmental,
    Social,
    Governance,
}

impl Pillar {
    pub const fn ordered() -> [Self; 3] {
        [Self::Environmental, Self::Social, Self::Governance]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Environmental => "Environmental",
            Self::Social => "Social",
            Self::Governance => "Governance",
        }
    }

    pub fn weights(self) -> &'static PillarWeights {
        match self {
            Self::Environmental => &PILLAR_WEIGHTS[0],
            Self::Social => &PILLAR_WEIGHTS[1],
            Self::Governance => &PILLAR_WEIGHTS[2],
        }
    }
}

/// Sub-metrics that carry weight in a pillar score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    EnergyEfficiency,
    WasteManagementScore,
    PollutionControl,
    RenewableEnergyPercent,
    WageFairness,
    HumanRightsIndex,
    DiversityInclusionScore,
    CommunityEngagement,
    WorkerSafety,
    TransparencyScore,
    CorruptionRisk,
    BoardDiversity,
    EthicsProgram,
    ComplianceSystems,
}

impl MetricKey {
    pub const fn label(self) -> &'static str {
        match self {
            Self::EnergyEfficiency => "Energy Efficiency",
            Self::WasteManagementScore => "Waste Management",
            Self::PollutionControl => "Pollution Control",
            Self::RenewableEnergyPercent => "Renewable Energy",
            Self::WageFairness => "Wage Fairness",
            Self::HumanRightsIndex => "Human Rights",
            Self::DiversityInclusionScore => "Diversity & Inclusion",
            Self::CommunityEngagement => "Community Engagement",
            Self::WorkerSafety => "Worker Safety",
            Self::TransparencyScore => "Transparency",
            Self::CorruptionRisk => "Corruption Risk",
            Self::BoardDiversity => "Board Diversity",
            Self::EthicsProgram => "Ethics Program",
            Self::ComplianceSystems => "Compliance Systems",
        }
    }

    /// Lower raw values are better for risk metrics; they are inverted before weighting.
    pub const fn is_risk(self) -> bool {
        matches!(self, Self::CorruptionRisk)
    }

    /// Reads the metric onto the 0..=1 "higher is better" scale used for weighting.
    pub fn normalized(self, metrics: &SupplierMetrics) -> f64 {
        match self {
            Self::EnergyEfficiency => number(&metrics.energy_efficiency),
            Self::WasteManagementScore => number(&metrics.waste_management_score),
            Self::PollutionControl => number(&metrics.pollution_control),
            Self::RenewableEnergyPercent => number(&metrics.renewable_energy_percent) / 100.0,
            Self::WageFairness => number(&metrics.wage_fairness),
            Self::HumanRightsIndex => number(&metrics.human_rights_index),
            Self::DiversityInclusionScore => number(&metrics.diversity_inclusion_score),
            Self::CommunityEngagement => number(&metrics.community_engagement),
            Self::WorkerSafety => number(&metrics.worker_safety),
            Self::TransparencyScore => number(&metrics.transparency_score),
            Self::CorruptionRisk => 1.0 - number(&metrics.corruption_risk),
            Self::BoardDiversity => number(&metrics.board_diversity),
            Self::EthicsProgram => number(&metrics.ethics_program),
            Self::ComplianceSystems => number(&metrics.compliance_systems),
        }
    }
}

/// Weight of a sub-metric inside its pillar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricWeight {
    pub key: MetricKey,
    pub weight: f64,
}

/// How sub-metrics combine into a pillar and how the pillar feeds the overall score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillarWeights {
    pub pillar: Pillar,
    pub overall_weight: f64,
    pub metrics: &'static [MetricWeight],
}

impl PillarWeights {
    pub fn metric_total(&self) -> f64 {
        self.metrics.iter().map(|metric| metric.weight).sum()
    }
}

const fn weight(key: MetricKey, weight: f64) -> MetricWeight {
    MetricWeight { key, weight }
}

const ENVIRONMENTAL_METRICS: [MetricWeight; 4] = [
    weight(MetricKey::EnergyEfficiency, 0.25),
    weight(MetricKey::WasteManagementScore, 0.25),
    weight(MetricKey::PollutionControl, 0.20),
    weight(MetricKey::RenewableEnergyPercent, 0.30),
];

const SOCIAL_METRICS: [MetricWeight; 5] = [
    weight(MetricKey::WageFairness, 0.25),
    weight(MetricKey::HumanRightsIndex, 0.30),
    weight(MetricKey::DiversityInclusionScore, 0.15),
    weight(MetricKey::CommunityEngagement, 0.15),
    weight(MetricKey::WorkerSafety, 0.15),
];

const GOVERNANCE_METRICS: [MetricWeight; 5] = [
    weight(MetricKey::TransparencyScore, 0.25),
    weight(MetricKey::CorruptionRisk, 0.25),
    weight(MetricKey::BoardDiversity, 0.15),
    weight(MetricKey::EthicsProgram, 0.20),
    weight(MetricKey::ComplianceSystems, 0.15),
];

/// Preview weighting. The overall split (33/33/34) approximates the authoritative
/// server composite and is not meant to match it exactly.
pub const PILLAR_WEIGHTS: [PillarWeights; 3] = [
    PillarWeights {
        pillar: Pillar::Environmental,
        overall_weight: 0.33,
        metrics: &ENVIRONMENTAL_METRICS,
    },
    PillarWeights {
        pillar: Pillar::Social,
        overall_weight: 0.33,
        metrics: &SOCIAL_METRICS,
    },
    PillarWeights {
        pillar: Pillar::Governance,
        overall_weight: 0.34,
        metrics: &GOVERNANCE_METRICS,
    },
];
