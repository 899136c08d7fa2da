// crates/location/src/domain/repositories/location_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::Result;

use crate::domain::entities::DriverLocation;
use crate::domain::value_objects::SearchRadius;

/// Index géographique des positions des véhicules
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// UPSERT de la position (écrase la précédente pour ce véhicule)
    async fn save(&self, location: &DriverLocation) -> Result<()>;

    /// Recherche de proximité, triée par distance croissante.
    /// Retourne des tuples (DriverLocation, distance exprimée dans l'unité du rayon).
    /// `limit` hors de [1, 100] est ramené à 20.
    async fn search(
        &self,
        center: GeoPoint,
        radius: SearchRadius,
        limit: i64,
    ) -> Result<Vec<(DriverLocation, f64)>>;
}
