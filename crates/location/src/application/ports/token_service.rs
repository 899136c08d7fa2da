// crates/location/src/application/ports/token_service.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::Result;

/// Identité extraite d'un jeton d'accès vérifié
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub subject: String,
    pub role: String,
    pub issuer: String,
}

pub trait TokenService: Send + Sync {
    /// `Unauthorized` si le jeton est absent, mal signé, expiré ou d'un autre émetteur
    fn validate_credential(&self, raw: &str) -> Result<Claims>;
}
