// crates/location/src/utils/token_service_stub.rs

use shared_kernel::errors::{DomainError, Result};
use std::collections::HashMap;

use crate::application::ports::{Claims, TokenService};

/// Jetons acceptés : "token-<subject>" -> subject
#[derive(Default)]
pub struct TokenServiceStub {
    tokens: HashMap<String, Claims>,
}

impl TokenServiceStub {
    pub fn accepting(subjects: &[&str]) -> Self {
        let tokens = subjects
            .iter()
            .map(|subject| {
                (
                    format!("token-{}", subject),
                    Claims {
                        subject: subject.to_string(),
                        role: "driver".to_string(),
                        issuer: "test-issuer".to_string(),
                    },
                )
            })
            .collect();
        Self { tokens }
    }
}

impl TokenService for TokenServiceStub {
    fn validate_credential(&self, raw: &str) -> Result<Claims> {
        self.tokens
            .get(raw)
            .cloned()
            .ok_or_else(|| DomainError::Unauthorized {
                reason: "Invalid token".to_string(),
            })
    }
}
