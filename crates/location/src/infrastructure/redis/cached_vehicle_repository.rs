// crates/location/src/infrastructure/redis/cached_vehicle_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::repositories::CacheRepository;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::Vehicle;
use crate::domain::repositories::VehicleRepository;
use crate::domain::value_objects::VehicleId;

const VEHICLE_KEY_NAMESPACE: &str = "vehicle";
pub const VEHICLE_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Fiches véhicules sérialisées en JSON sous "vehicle:<id>"
pub struct CachedVehicleRepository {
    cache: Arc<dyn CacheRepository>,
    ttl: Duration,
}

impl CachedVehicleRepository {
    pub fn new(cache: Arc<dyn CacheRepository>) -> Self {
        Self {
            cache,
            ttl: VEHICLE_CACHE_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub(crate) fn cache_key(id: &VehicleId) -> String {
        format!("{}:{}", VEHICLE_KEY_NAMESPACE, id)
    }
}

#[async_trait]
impl VehicleRepository for CachedVehicleRepository {
    async fn get(&self, id: &VehicleId) -> Result<Vehicle> {
        id.validate()?;

        self.cache
            .get(&Self::cache_key(id))
            .await?
            .map(|raw| {
                serde_json::from_str::<Vehicle>(&raw).map_err(|e| {
                    DomainError::Storage(format!("Corrupted vehicle cache entry '{}': {}", id, e))
                })
            })
            .transpose()?
            .ok_or_not_found(id)
    }

    async fn save(&self, vehicle: &Vehicle) -> Result<()> {
        vehicle.id().validate()?;

        let payload = serde_json::to_string(vehicle)
            .map_err(|e| DomainError::Internal(format!("Vehicle serialization failed: {}", e)))?;

        self.cache
            .set(&Self::cache_key(vehicle.id()), &payload, Some(self.ttl))
            .await?;

        Ok(())
    }

    async fn delete(&self, id: &VehicleId) -> Result<()> {
        id.validate()?;

        self.cache.delete(&Self::cache_key(id)).await?;
        Ok(())
    }
}
