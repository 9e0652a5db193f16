use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde_json::json;

use super::domain::{SupplierId, SupplierSubmission, SupplierSummaryView};
use super::repository::{RepositoryError, SupplierRepository};
use super::service::{SupplierPreviewService, SupplierServiceError};
use crate::preview::SupplierMetrics;

/// Router builder exposing supplier registration endpoints.
pub fn supplier_router<R>(service: Arc<SupplierPreviewService<R>>) -> Router
where
    R: SupplierRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/suppliers",
            post(register_handler::<R>).get(list_handler::<R>),
        )
        .route("/api/v1/suppliers/:supplier_id", get(detail_handler::<R>))
        .route(
            "/api/v1/suppliers/:supplier_id/metrics",
            put(refresh_handler::<R>),
        )
        .with_state(service)
}

fn error_response(error: SupplierServiceError) -> Response {
    let status = match &error {
        SupplierServiceError::InvalidSubmission(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SupplierServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SupplierServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SupplierServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<SupplierPreviewService<R>>>,
    axum::Json(submission): axum::Json<SupplierSubmission>,
) -> Response
where
    R: SupplierRepository + 'static,
{
    match service.register(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<SupplierPreviewService<R>>>,
) -> Response
where
    R: SupplierRepository + 'static,
{
    match service.list() {
        Ok(records) => {
            let rows: Vec<SupplierSummaryView> =
                records.iter().map(|record| record.summary_view()).collect();
            (StatusCode::OK, axum::Json(rows)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<SupplierPreviewService<R>>>,
    Path(supplier_id): Path<String>,
) -> Response
where
    R: SupplierRepository + 'static,
{
    match service.get(&SupplierId(supplier_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn refresh_handler<R>(
    State(service): State<Arc<SupplierPreviewService<R>>>,
    Path(supplier_id): Path<String>,
    axum::Json(metrics): axum::Json<SupplierMetrics>,
) -> Response
where
    R: SupplierRepository + 'static,
{
    match service.refresh(&SupplierId(supplier_id), metrics) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}
