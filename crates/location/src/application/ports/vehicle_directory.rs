// crates/location/src/application/ports/vehicle_directory.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;
use std::collections::HashMap;

use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;

/// Source de vérité distante des fiches véhicules
#[async_trait]
pub trait VehicleDirectory: Send + Sync {
    /// Les identifiants inconnus sont simplement absents de la map (ce n'est pas une erreur).
    /// Échec du transport ou du service : `RemoteService`.
    async fn fetch_vehicles(&self, ids: &[VehicleId]) -> Result<HashMap<VehicleId, Vehicle>>;
}
