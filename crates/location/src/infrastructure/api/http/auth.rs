// crates/location/src/infrastructure/api/http/auth.rs

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use shared_kernel::errors::DomainError;
use std::sync::Arc;

use crate::application::ports::Claims;
use crate::infrastructure::api::http::{HttpError, LocationApiState};

const BEARER_PREFIX: &str = "bearer ";

/// Appelant authentifié par un jeton `Authorization: Bearer <jwt>`
#[derive(Debug, Clone)]
pub struct AuthenticatedCaller(pub Claims);

impl AuthenticatedCaller {
    pub fn subject(&self) -> &str {
        &self.0.subject
    }
}

fn unauthorized(reason: &str) -> HttpError {
    HttpError::from(DomainError::Unauthorized {
        reason: reason.to_string(),
    })
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;

    // Préfixe insensible à la casse ("Bearer", "bearer")
    match header.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => {
            Some(header[BEARER_PREFIX.len()..].trim())
        }
        _ => None,
    }
}

#[axum::async_trait]
impl FromRequestParts<Arc<LocationApiState>> for AuthenticatedCaller {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<LocationApiState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| unauthorized("Missing bearer token"))?;

        let claims = state
            .token_service
            .validate_credential(token)
            .map_err(HttpError::from)?;

        Ok(Self(claims))
    }
}
