use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// JSON error body returned by every catalog route.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub kind: &'static str,
    pub code: u16,
    pub message: String,
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, kind: &'static str, code: u16, message: impl Into<String>) -> Self {
        Self { status, body: ErrorBody { error: title, kind, code, message: message.into() } }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::PreconditionFailed(_) => (StatusCode::PRECONDITION_FAILED, "Precondition Failed"),
            ServiceError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error"),
        };
        Self::new(status, title, e.kind(), e.code(), e.to_string())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = self.body.code, kind = self.body.kind, error = %self.body.message, "request failed");
        } else {
            warn!(code = self.body.code, kind = self.body.kind, error = %self.body.message, "request rejected");
        }
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migration failed: {0}")]
    Migration(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::EntityKind;
    use uuid::Uuid;

    #[test]
    fn service_errors_map_to_http_statuses() {
        let nf: JsonApiError = ServiceError::not_found(EntityKind::Product, "abc").into();
        assert_eq!(nf.status, StatusCode::NOT_FOUND);
        assert_eq!(nf.body.kind, "not_found");
        assert_eq!(nf.body.code, 2001);

        let pf: JsonApiError = ServiceError::not_associated(Uuid::new_v4(), Uuid::new_v4()).into();
        assert_eq!(pf.status, StatusCode::PRECONDITION_FAILED);
        assert_eq!(pf.body.error, "Precondition Failed");

        let db: JsonApiError = ServiceError::Db("boom".into()).into();
        assert_eq!(db.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
