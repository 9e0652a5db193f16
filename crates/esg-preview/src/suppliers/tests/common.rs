use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::preview::{MetricValue, SupplierMetrics};
use crate::suppliers::domain::{SupplierId, SupplierRecord, SupplierSubmission};
use crate::suppliers::repository::{
    InMemorySupplierRepository, RepositoryError, SupplierRepository,
};
use crate::suppliers::service::SupplierPreviewService;

pub(super) fn disclosed_metrics() -> SupplierMetrics {
    let value = |raw: f64| Some(MetricValue::Number(raw));
    SupplierMetrics {
        energy_efficiency: value(0.82),
        waste_management_score: value(0.74),
        pollution_control: value(0.68),
        renewable_energy_percent: value(62.0),
        wage_fairness: value(0.7),
        human_rights_index: value(0.88),
        diversity_inclusion_score: value(0.55),
        community_engagement: value(0.6),
        worker_safety: value(0.9),
        injury_rate: value(1.2),
        training_hours: value(24.0),
        gender_diversity_percent: value(41.0),
        living_wage_ratio: value(1.1),
        transparency_score: value(0.8),
        board_diversity: value(0.45),
        ethics_program: value(0.75),
        compliance_systems: value(0.7),
        corruption_risk: value(0.15),
        board_independence: value(67.0),
        anti_corruption_policy: Some(MetricValue::Flag(true)),
        revenue: value(340.0),
        total_emissions: value(1820.0),
        water_usage: value(0.0),
        waste_generated: value(55.0),
        ..SupplierMetrics::default()
    }
}

pub(super) fn submission() -> SupplierSubmission {
    SupplierSubmission {
        name: "  Northwind Components ".to_string(),
        country: Some("DE".to_string()),
        industry: Some(" ".to_string()),
        metrics: disclosed_metrics(),
    }
}

pub(super) fn sparse_submission() -> SupplierSubmission {
    SupplierSubmission {
        name: "Harbor Logistics".to_string(),
        country: None,
        industry: Some("Freight".to_string()),
        metrics: SupplierMetrics {
            transparency_score: Some(MetricValue::Number(0.3)),
            anti_corruption_policy: Some(MetricValue::Text("yes".to_string())),
            ..SupplierMetrics::default()
        },
    }
}

pub(super) fn build_service() -> (
    SupplierPreviewService<InMemorySupplierRepository>,
    Arc<InMemorySupplierRepository>,
) {
    let repository = Arc::new(InMemorySupplierRepository::default());
    let service = SupplierPreviewService::new(repository.clone());
    (service, repository)
}

pub(super) struct ConflictRepository;

impl SupplierRepository for ConflictRepository {
    fn insert(&self, _record: SupplierRecord) -> Result<SupplierRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: SupplierRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &SupplierId) -> Result<Option<SupplierRecord>, RepositoryError> {
        Ok(None)
    }

    fn list(&self, _limit: usize) -> Result<Vec<SupplierRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl SupplierRepository for UnavailableRepository {
    fn insert(&self, _record: SupplierRecord) -> Result<SupplierRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("registry offline".to_string()))
    }

    fn update(&self, _record: SupplierRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("registry offline".to_string()))
    }

    fn fetch(&self, _id: &SupplierId) -> Result<Option<SupplierRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("registry offline".to_string()))
    }

    fn list(&self, _limit: usize) -> Result<Vec<SupplierRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("registry offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
