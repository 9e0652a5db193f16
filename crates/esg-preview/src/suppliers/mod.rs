//! Supplier registration backed by the preview engine.
//!
//! Registered suppliers keep the metrics they were submitted with alongside the
//! preview computed at registration time; refreshing metrics recomputes it.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{SupplierId, SupplierRecord, SupplierSubmission, SupplierSummaryView};
pub use repository::{InMemorySupplierRepository, RepositoryError, SupplierRepository};
pub use router::supplier_router;
pub use service::{SupplierPreviewService, SupplierServiceError};
