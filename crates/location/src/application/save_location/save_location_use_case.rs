// crates/location/src/application/save_location/save_location_use_case.rs

use shared_kernel::domain::value_objects::{GeoPoint, Latitude, Longitude};
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::concurrency::with_cancellation;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::application::resolve_vehicle::ResolveVehicleUseCase;
use crate::application::save_location::SaveLocationCommand;
use crate::domain::entities::DriverLocation;
use crate::domain::repositories::LocationRepository;
use crate::domain::value_objects::VehicleId;

pub struct SaveLocationUseCase {
    locations: Arc<dyn LocationRepository>,
    resolver: Arc<ResolveVehicleUseCase>,
}

impl SaveLocationUseCase {
    pub fn new(locations: Arc<dyn LocationRepository>, resolver: Arc<ResolveVehicleUseCase>) -> Self {
        Self { locations, resolver }
    }

    pub async fn execute(&self, cmd: SaveLocationCommand, token: &CancellationToken) -> Result<()> {
        with_cancellation(token, self.run(cmd)).await
    }

    async fn run(&self, cmd: SaveLocationCommand) -> Result<()> {
        // 1. Identité
        if cmd.caller_id.trim().is_empty() {
            return Err(DomainError::Unauthorized {
                reason: "Missing caller identity".to_string(),
            });
        }

        // 2. Forme de la requête (le premier champ invalide gagne)
        let vehicle_id = VehicleId::try_new(cmd.vehicle_id)?;
        let lat = Latitude::try_new(required(cmd.lat, Latitude::FIELD)?)?;
        let lng = Longitude::try_new(required(cmd.lng, Longitude::FIELD)?)?;

        // 3. Résolution du véhicule (cache-aside)
        let vehicle = self.resolver.execute(&vehicle_id).await?;

        // 4. Propriété : refus générique, sans détail sur la cause
        if !vehicle.is_owned_by(&cmd.caller_id) {
            tracing::warn!(
                vehicle_id = %vehicle_id,
                caller_id = %cmd.caller_id,
                "🚫 Location update rejected: caller does not own the vehicle"
            );
            return Err(DomainError::Forbidden {
                reason: "Access denied".to_string(),
            });
        }

        // 5. Écriture dans l'index géographique
        let location = DriverLocation::new(vehicle_id, GeoPoint::from_raw(lat.value(), lng.value()));
        self.locations.save(&location).await?;

        tracing::debug!(vehicle_id = %location.vehicle_id(), lat = location.lat(), lng = location.lng(), "Location saved");

        Ok(())
    }
}

pub(crate) fn required(value: Option<f64>, field: &'static str) -> Result<f64> {
    value.ok_or_else(|| DomainError::Validation {
        field,
        reason: "Field is required".to_string(),
    })
}
