use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_preview_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use esg_preview::config::AppConfig;
use esg_preview::error::AppError;
use esg_preview::preview::BatchPreviewImporter;
use esg_preview::suppliers::{InMemorySupplierRepository, SupplierPreviewService};
use esg_preview::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySupplierRepository::default());
    let suppliers = Arc::new(SupplierPreviewService::new(repository));
    let importer = BatchPreviewImporter::new(config.preview.batch_row_limit);

    let app = with_preview_routes(importer, suppliers)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        batch_row_limit = config.preview.batch_row_limit,
        "esg preview service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
