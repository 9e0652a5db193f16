use esg_preview::error::AppError;
use esg_preview::preview::SupplierMetrics;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load a metrics record from a JSON file; a missing path yields the neutral form.
pub(crate) fn load_metrics(path: Option<&Path>) -> Result<SupplierMetrics, AppError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(SupplierMetrics::neutral()),
    }
}
