// crates/location/src/domain/repositories/vehicle_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;

/// Cache local des fiches véhicules (expiration transparente : une entrée expirée est absente)
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// `NotFound` si absent ou expiré
    async fn get(&self, id: &VehicleId) -> Result<Vehicle>;

    /// Écrasement complet, TTL réinitialisé
    async fn save(&self, vehicle: &Vehicle) -> Result<()>;

    /// Idempotent
    async fn delete(&self, id: &VehicleId) -> Result<()>;
}
