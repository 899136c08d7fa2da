// crates/location/src/application/resolve_vehicle/resolve_vehicle_use_case.rs

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::concurrency::Singleflight;
use std::sync::Arc;

use crate::application::ports::VehicleDirectory;
use crate::domain::entities::Vehicle;
use crate::domain::repositories::VehicleRepository;
use crate::domain::value_objects::VehicleId;

/// Cache-aside : cache local d'abord, service Vehicle ensuite, puis réécriture best-effort.
/// Les erreurs du cache ne remontent jamais ; seule la source de vérité peut faire échouer l'appel.
pub struct ResolveVehicleUseCase {
    cache: Arc<dyn VehicleRepository>,
    directory: Arc<dyn VehicleDirectory>,
    in_flight: Option<Singleflight<VehicleId, Vehicle>>,
}

impl ResolveVehicleUseCase {
    pub fn new(cache: Arc<dyn VehicleRepository>, directory: Arc<dyn VehicleDirectory>) -> Self {
        Self {
            cache,
            directory,
            in_flight: None,
        }
    }

    /// Déduplication des misses concurrents sur un même véhicule
    pub fn with_singleflight(mut self) -> Self {
        self.in_flight = Some(Singleflight::new());
        self
    }

    pub async fn execute(&self, id: &VehicleId) -> Result<Vehicle> {
        if id.is_empty() {
            return Err(DomainError::InvalidArgument(
                "vehicle id must not be empty".to_string(),
            ));
        }

        // 1. Cache (une copie potentiellement périmée est acceptée, bornée par le TTL)
        match self.cache.get(id).await {
            Ok(vehicle) => {
                tracing::debug!(vehicle_id = %id, "Vehicle cache hit");
                return Ok(vehicle);
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(vehicle_id = %id, "Vehicle cache miss");
            }
            Err(e) => {
                tracing::warn!(vehicle_id = %id, error = %e, "⚠️ Vehicle cache read failed, falling back to remote");
            }
        }

        // 2. Source de vérité + réécriture
        match &self.in_flight {
            Some(flight) => flight.execute(id.clone(), || self.fetch_and_store(id)).await,
            None => self.fetch_and_store(id).await,
        }
    }

    async fn fetch_and_store(&self, id: &VehicleId) -> Result<Vehicle> {
        let mut vehicles = self
            .directory
            .fetch_vehicles(std::slice::from_ref(id))
            .await
            .inspect_err(|e| {
                tracing::error!(vehicle_id = %id, error = %e, "❌ Vehicle lookup failed");
            })?;

        // Absent de la réponse : rien à mettre en cache
        let vehicle = vehicles.remove(id).ok_or_not_found(id)?;

        if let Err(e) = self.cache.save(&vehicle).await {
            tracing::warn!(vehicle_id = %id, error = %e, "⚠️ Failed to write vehicle back to cache");
        }

        Ok(vehicle)
    }
}
