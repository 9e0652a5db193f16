use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::preview::{RiskLevel, SupplierMetrics, SupplierPreview};

/// Identifier wrapper for registered suppliers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SupplierId(pub String);

/// Registration form as collected from the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierSubmission {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub metrics: SupplierMetrics,
}

/// Stored supplier with the preview computed from its latest metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub id: SupplierId,
    pub name: String,
    pub country: Option<String>,
    pub industry: Option<String>,
    pub metrics: SupplierMetrics,
    pub preview: SupplierPreview,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupplierRecord {
    pub fn summary_view(&self) -> SupplierSummaryView {
        SupplierSummaryView {
            id: self.id.clone(),
            name: self.name.clone(),
            overall: self.preview.score.overall,
            risk_level: self.preview.score.risk_level,
            completeness_ratio: self.preview.completeness.ratio,
            may_be_capped: self.preview.completeness.below_cap_threshold(),
        }
    }
}

/// Row shown in supplier tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierSummaryView {
    pub id: SupplierId,
    pub name: String,
    pub overall: f64,
    pub risk_level: RiskLevel,
    pub completeness_ratio: f64,
    pub may_be_capped: bool,
}
