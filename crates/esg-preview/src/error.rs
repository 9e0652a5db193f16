use crate::config::ConfigError;
use crate::preview::BatchImportError;
use crate::suppliers::{RepositoryError, SupplierServiceError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Import(BatchImportError),
    Input(serde_json::Error),
    Supplier(SupplierServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Import(err) => write!(f, "batch import error: {}", err),
            AppError::Input(err) => write!(f, "invalid metrics input: {}", err),
            AppError::Supplier(err) => write!(f, "supplier registry error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::Supplier(err) => Some(err),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Import(_) | AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::Supplier(SupplierServiceError::InvalidSubmission(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Supplier(SupplierServiceError::Repository(RepositoryError::NotFound)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Supplier(SupplierServiceError::Repository(RepositoryError::Conflict)) => {
                StatusCode::CONFLICT
            }
            AppError::Supplier(SupplierServiceError::Repository(
                RepositoryError::Unavailable(_),
            )) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<BatchImportError> for AppError {
    fn from(value: BatchImportError) -> Self {
        Self::Import(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Input(value)
    }
}

impl From<SupplierServiceError> for AppError {
    fn from(value: SupplierServiceError) -> Self {
        Self::Supplier(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_side_failures_map_to_4xx() {
        let input = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        assert_eq!(AppError::from(input).status_code(), StatusCode::BAD_REQUEST);

        let missing = AppError::from(SupplierServiceError::Repository(RepositoryError::NotFound));
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let limit = AppError::from(BatchImportError::TooManyRows { limit: 10 });
        assert_eq!(limit.status_code(), StatusCode::BAD_REQUEST);
        assert!(limit.to_string().contains("10 rows"));
    }

    #[test]
    fn unavailable_registry_maps_to_503() {
        let err = AppError::from(SupplierServiceError::Repository(
            RepositoryError::Unavailable("store offline".to_string()),
        ));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn infrastructure_failures_map_to_500() {
        let io = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(io.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
