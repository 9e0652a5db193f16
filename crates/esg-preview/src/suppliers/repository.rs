use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::domain::{SupplierId, SupplierRecord};

/// Storage abstraction so the service can be exercised in isolation.
pub trait SupplierRepository: Send + Sync {
    fn insert(&self, record: SupplierRecord) -> Result<SupplierRecord, RepositoryError>;
    fn update(&self, record: SupplierRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SupplierId) -> Result<Option<SupplierRecord>, RepositoryError>;
    fn list(&self, limit: usize) -> Result<Vec<SupplierRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local registry; records are ordered by id, which follows registration order.
#[derive(Default, Clone)]
pub struct InMemorySupplierRepository {
    records: Arc<Mutex<BTreeMap<SupplierId, SupplierRecord>>>,
}

impl SupplierRepository for InMemorySupplierRepository {
    fn insert(&self, record: SupplierRecord) -> Result<SupplierRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SupplierRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SupplierId) -> Result<Option<SupplierRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<SupplierRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().take(limit).cloned().collect())
    }
}
