// crates/location/src/domain/value_objects/vehicle_id.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;

/// Identifiant opaque d'un véhicule, attribué par le service Vehicle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(String);

impl VehicleId {
    pub const FIELD: &'static str = "vehicle_id";

    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        let id = Self(id.into().trim().to_string());
        id.validate()?;
        Ok(id)
    }

    /// Reconstruction sans validation (valeurs relues depuis Redis ou le service distant)
    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueObject for VehicleId {
    fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(DomainError::Validation {
                field: Self::FIELD,
                reason: "Vehicle ID is required".to_string(),
            });
        }
        Ok(())
    }
}

impl FromStr for VehicleId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Self::try_new(s)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for VehicleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_id_is_rejected() {
        let err = VehicleId::try_new("   ").unwrap_err();

        assert!(matches!(err, DomainError::Validation { field: "vehicle_id", .. }));
    }

    #[test]
    fn test_id_is_trimmed() {
        assert_eq!(VehicleId::try_new(" v1 ").unwrap().as_str(), "v1");
    }

    #[test]
    fn test_from_raw_skips_validation() {
        assert!(VehicleId::from_raw("").is_empty());
    }
}
