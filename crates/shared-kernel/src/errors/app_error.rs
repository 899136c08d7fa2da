// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Entité introuvable (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 2. Validation (400)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            // 3. Identité non valide (401)
            DomainError::Unauthorized { reason } => Self::new(ErrorCode::Unauthorized, reason),

            // 4. Droits insuffisants (403)
            DomainError::Forbidden { reason } => Self::new(ErrorCode::Forbidden, reason),

            // 5. Dépendance distante indisponible ou requête annulée (503)
            DomainError::RemoteService { service, .. } => Self::new(
                ErrorCode::ServiceUnavailable,
                format!("The {service} service is unavailable. Please try again later."),
            ),
            DomainError::Cancelled => {
                Self::new(ErrorCode::ServiceUnavailable, "The request was cancelled.")
            }

            // 6. Erreurs techniques (500) : on masque le détail au client
            DomainError::Storage(_) => Self::new(
                ErrorCode::InfrastructureFailure,
                "A storage error occurred. Please try again later.",
            ),
            DomainError::InvalidArgument(_) | DomainError::Internal(_) => Self::new(
                ErrorCode::InternalError,
                "An unexpected error occurred. Please try again later.",
            ),
        }
    }
}

// Pour transformer les erreurs Redis (fred) en AppError
#[cfg(feature = "redis")]
impl From<fred::error::Error> for AppError {
    fn from(err: fred::error::Error) -> Self {
        // La sévérité appartient à l'appelant (un échec de cache peut être absorbé)
        tracing::debug!("Redis infrastructure error: {:?}", err);

        Self::new(ErrorCode::InfrastructureFailure, err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
