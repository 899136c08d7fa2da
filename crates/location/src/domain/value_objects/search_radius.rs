// crates/location/src/domain/value_objects/search_radius.rs

use crate::domain::value_objects::DistanceUnit;
use shared_kernel::errors::{DomainError, Result};

pub const DEFAULT_SEARCH_LIMIT: usize = 20;
pub const MAX_SEARCH_LIMIT: usize = 100;

/// Limite effective d'une recherche : hors de [1, 100] on retombe sur la valeur par défaut
pub fn effective_limit(requested: i64) -> usize {
    if requested <= 0 || requested > MAX_SEARCH_LIMIT as i64 {
        DEFAULT_SEARCH_LIMIT
    } else {
        requested as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRadius {
    value: f64,
    unit: DistanceUnit,
}

impl SearchRadius {
    pub const FIELD: &'static str = "radius";

    pub fn try_new(value: f64, unit: DistanceUnit) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::Validation {
                field: Self::FIELD,
                reason: "Radius must be a positive number".to_string(),
            });
        }
        Ok(Self { value, unit })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn in_meters(&self) -> f64 {
        self.unit.to_meters(self.value)
    }
}
