// crates/location/src/infrastructure/auth/jwt_token_service.rs

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use shared_kernel::errors::{AppError, AppResult, DomainError, ErrorCode, Result};
use std::path::Path;

use crate::application::ports::{Claims, TokenService};

/// Claims portés par les jetons d'accès émis par le service Identity
#[derive(Debug, Deserialize)]
struct AccessTokenClaims {
    sub: String,
    #[serde(default)]
    role: String,
    iss: String,
}

/// Vérification RS256 des jetons d'accès (clé publique PEM + émetteur attendu)
pub struct JwtTokenService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenService {
    pub fn from_rsa_pem(public_key_pem: &[u8], issuer: &str) -> AppResult<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem).map_err(|e| {
            AppError::new(
                ErrorCode::InternalError,
                format!("Invalid access token public key: {}", e),
            )
        })?;

        // Seul RS256 est accepté ; exp, iss et sub sont obligatoires
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    pub async fn from_file(path: impl AsRef<Path>, issuer: &str) -> AppResult<Self> {
        let path = path.as_ref();
        let pem = tokio::fs::read(path).await.map_err(|e| {
            AppError::new(
                ErrorCode::InternalError,
                format!("Cannot read access token public key '{}': {}", path.display(), e),
            )
        })?;

        Self::from_rsa_pem(&pem, issuer)
    }
}

impl TokenService for JwtTokenService {
    fn validate_credential(&self, raw: &str) -> Result<Claims> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::Unauthorized {
                reason: "Token is empty".to_string(),
            });
        }

        let data = decode::<AccessTokenClaims>(raw, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Access token rejected");
            DomainError::Unauthorized {
                reason: "Invalid token".to_string(),
            }
        })?;

        Ok(Claims {
            subject: data.claims.sub,
            role: data.claims.role,
            issuer: data.claims.iss,
        })
    }
}
