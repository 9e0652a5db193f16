use serde::{Deserialize, Serialize};

/// Raw metric value as it arrived at the input boundary.
///
/// Form state and CSV cells are loosely typed, so a numeric field may carry text
/// or a flag. Scoring coerces every variant to a number while completeness only
/// asks whether a value was supplied at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Flag(bool),
    Text(String),
    /// Arrays, objects and anything else the form should not have sent.
    Other(serde_json::Value),
}

impl MetricValue {
    /// Numeric reading used by the scorer. Anything unparseable reads as zero.
    pub fn as_number(&self) -> f64 {
        let value = match self {
            MetricValue::Number(value) => *value,
            MetricValue::Flag(true) => 1.0,
            MetricValue::Flag(false) => 0.0,
            MetricValue::Text(raw) => raw.trim().parse::<f64>().unwrap_or(0.0),
            MetricValue::Other(_) => 0.0,
        };

        if value.is_finite() {
            value
        } else {
            0.0
        }
    }

    /// Empty text counts as not supplied; zero does not.
    pub fn is_present(&self) -> bool {
        !matches!(self, MetricValue::Text(raw) if raw.is_empty())
    }

    pub fn is_number(&self) -> bool {
        matches!(self, MetricValue::Number(_))
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, MetricValue::Flag(_))
    }

    /// Interpret a spreadsheet cell. Blank cells are absent.
    pub fn from_cell(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return Some(MetricValue::Flag(true));
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Some(MetricValue::Flag(false));
        }

        match trimmed.parse::<f64>() {
            Ok(value) => Some(MetricValue::Number(value)),
            Err(_) => Some(MetricValue::Text(trimmed.to_string())),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        MetricValue::Flag(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

/// Flat supplier disclosure record shared by the scorer and the completeness estimator.
///
/// Normalized sub-metrics live on a 0..=1 scale; `*_percent`, `injury_rate`,
/// `training_hours` and `board_independence` are 0..=100; `living_wage_ratio`
/// is centered on 1.0. Context fields only feed completeness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_efficiency: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_management_score: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pollution_control: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewable_energy_percent: Option<MetricValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wage_fairness: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_rights_index: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diversity_inclusion_score: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_engagement: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_safety: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury_rate: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_hours: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_diversity_percent: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub living_wage_ratio: Option<MetricValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparency_score: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_diversity: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethics_program: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_systems: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corruption_risk: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_independence: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anti_corruption_policy: Option<MetricValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_emissions: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co2_emissions: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_usage: Option<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_generated: Option<MetricValue>,
}

impl SupplierMetrics {
    /// The untouched evaluation form: every normalized sub-metric at its midpoint.
    pub fn neutral() -> Self {
        let mid = || Some(MetricValue::Number(0.5));
        Self {
            energy_efficiency: mid(),
            waste_management_score: mid(),
            pollution_control: mid(),
            renewable_energy_percent: Some(MetricValue::Number(50.0)),
            wage_fairness: mid(),
            human_rights_index: mid(),
            diversity_inclusion_score: mid(),
            community_engagement: mid(),
            worker_safety: mid(),
            transparency_score: mid(),
            board_diversity: mid(),
            ethics_program: mid(),
            compliance_systems: mid(),
            corruption_risk: mid(),
            ..Self::default()
        }
    }
}

/// Scoring read of an optional field: missing or malformed values contribute nothing.
pub(crate) fn number(field: &Option<MetricValue>) -> f64 {
    field.as_ref().map(MetricValue::as_number).unwrap_or(0.0)
}

/// Completeness read of an optional field.
pub(crate) fn present(field: &Option<MetricValue>) -> bool {
    field.as_ref().map(MetricValue::is_present).unwrap_or(false)
}
