use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use std::io::Cursor;

use super::{
    BatchPreviewImporter, BatchPreviewReport, CompletenessResult, PreviewEngine,
    ScorePreviewResult, SupplierMetrics, SupplierPreview,
};
use crate::error::AppError;

#[derive(Clone)]
pub(crate) struct PreviewState {
    engine: PreviewEngine,
    importer: BatchPreviewImporter,
}

#[derive(Debug, Deserialize)]
pub struct BatchPreviewRequest {
    pub csv: String,
}

/// Router builder exposing the stateless preview endpoints.
pub fn preview_router(importer: BatchPreviewImporter) -> Router {
    let state = PreviewState {
        engine: PreviewEngine::new(),
        importer,
    };

    Router::new()
        .route("/api/v1/preview", post(preview_handler))
        .route("/api/v1/preview/score", post(score_handler))
        .route("/api/v1/preview/completeness", post(completeness_handler))
        .route("/api/v1/preview/batch", post(batch_handler))
        .with_state(state)
}

pub(crate) async fn score_handler(
    State(state): State<PreviewState>,
    Json(metrics): Json<SupplierMetrics>,
) -> Json<ScorePreviewResult> {
    Json(state.engine.score(&metrics))
}

pub(crate) async fn completeness_handler(
    State(state): State<PreviewState>,
    Json(metrics): Json<SupplierMetrics>,
) -> Json<CompletenessResult> {
    Json(state.engine.completeness(&metrics))
}

pub(crate) async fn preview_handler(
    State(state): State<PreviewState>,
    Json(metrics): Json<SupplierMetrics>,
) -> Json<SupplierPreview> {
    Json(state.engine.preview(&metrics))
}

pub(crate) async fn batch_handler(
    State(state): State<PreviewState>,
    Json(request): Json<BatchPreviewRequest>,
) -> Result<Json<BatchPreviewReport>, AppError> {
    let reader = Cursor::new(request.csv.into_bytes());
    let report = state.importer.import_reader(reader)?;
    Ok(Json(report))
}
