// crates/location/src/infrastructure/api/http/error.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared_kernel::errors::{AppError, DomainError, ErrorCode};

/// Erreur renvoyée au client : corps JSON `{code, message, details?}`
#[derive(Debug)]
pub struct HttpError(pub AppError);

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InfrastructureFailure | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        if err.is_infrastructure() || matches!(err, DomainError::Internal(_) | DomainError::InvalidArgument(_)) {
            tracing::error!(error = %err, "❌ Request failed");
        }
        Self(AppError::from(err))
    }
}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.0)).into_response()
    }
}
