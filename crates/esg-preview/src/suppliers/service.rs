use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{SupplierId, SupplierRecord, SupplierSubmission};
use super::repository::{RepositoryError, SupplierRepository};
use crate::preview::{PreviewEngine, SupplierMetrics};

/// Upper bound on records returned by a single listing.
pub const MAX_LISTED_SUPPLIERS: usize = 500;

/// Service composing the preview engine with supplier storage.
pub struct SupplierPreviewService<R> {
    repository: Arc<R>,
    engine: PreviewEngine,
}

static SUPPLIER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_supplier_id() -> SupplierId {
    let id = SUPPLIER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SupplierId(format!("sup-{id:06}"))
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

impl<R> SupplierPreviewService<R>
where
    R: SupplierRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            engine: PreviewEngine::new(),
        }
    }

    /// Register a supplier and store the preview computed from its metrics.
    pub fn register(
        &self,
        submission: SupplierSubmission,
    ) -> Result<SupplierRecord, SupplierServiceError> {
        let name = submission.name.trim().to_string();
        if name.is_empty() {
            return Err(SupplierServiceError::InvalidSubmission(
                "supplier name is required".to_string(),
            ));
        }

        let now = Utc::now();
        let preview = self.engine.preview(&submission.metrics);
        let record = SupplierRecord {
            id: next_supplier_id(),
            name,
            country: clean(submission.country),
            industry: clean(submission.industry),
            metrics: submission.metrics,
            preview,
            registered_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(record)?;
        info!(
            supplier_id = %stored.id.0,
            overall = stored.preview.score.overall,
            completeness = stored.preview.completeness.ratio,
            "supplier registered"
        );
        Ok(stored)
    }

    /// Replace a supplier's metrics and recompute its preview.
    pub fn refresh(
        &self,
        supplier_id: &SupplierId,
        metrics: SupplierMetrics,
    ) -> Result<SupplierRecord, SupplierServiceError> {
        let mut record = self.get(supplier_id)?;
        record.preview = self.engine.preview(&metrics);
        record.metrics = metrics;
        record.updated_at = Utc::now();

        self.repository.update(record.clone())?;
        debug!(
            supplier_id = %record.id.0,
            overall = record.preview.score.overall,
            "supplier metrics refreshed"
        );
        Ok(record)
    }

    /// Fetch a supplier for API responses.
    pub fn get(&self, supplier_id: &SupplierId) -> Result<SupplierRecord, SupplierServiceError> {
        let record = self
            .repository
            .fetch(supplier_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list(&self) -> Result<Vec<SupplierRecord>, SupplierServiceError> {
        Ok(self.repository.list(MAX_LISTED_SUPPLIERS)?)
    }
}

/// Error raised by the supplier service.
#[derive(Debug, thiserror::Error)]
pub enum SupplierServiceError {
    #[error("invalid supplier submission: {0}")]
    InvalidSubmission(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
