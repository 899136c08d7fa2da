// crates/shared-kernel/src/errors/error.rs

use crate::errors::AppError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// Violation de contrat interne (ex: identifiant vide passé par un appelant)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// Identité absente ou invalide
    #[error("Unauthorized access: {reason}")]
    Unauthorized {
        reason: String,
    },

    /// Accès interdit malgré une identité valide (ex: propriétaire différent)
    #[error("Forbidden: {reason}")]
    Forbidden {
        reason: String,
    },

    /// Erreur du stockage (Redis)
    #[error("Storage failure: {0}")]
    Storage(String),

    /// Erreur d'un service distant (gRPC)
    #[error("Remote service '{service}' failure: {reason}")]
    RemoteService {
        service: &'static str,
        reason: String,
    },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Erreurs d'infrastructure : exposées à l'appelant, qui peut décider de rejouer
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::RemoteService { .. })
    }
}

impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        match err.code {
            crate::errors::ErrorCode::NotFound => DomainError::NotFound {
                entity: "Resource",
                id: "unknown".into(),
            },
            crate::errors::ErrorCode::InfrastructureFailure => DomainError::Storage(err.message),
            _ => DomainError::Internal(err.message),
        }
    }
}
