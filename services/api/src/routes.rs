use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use esg_preview::preview::{preview_router, BatchPreviewImporter};
use esg_preview::suppliers::{supplier_router, SupplierPreviewService, SupplierRepository};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_preview_routes<R>(
    importer: BatchPreviewImporter,
    suppliers: Arc<SupplierPreviewService<R>>,
) -> Router
where
    R: SupplierRepository + 'static,
{
    preview_router(importer)
        .merge(supplier_router(suppliers))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "initializing")
    };

    (status, Json(json!({ "status": label })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
