// crates/location/src/application/search_locations/search_locations_use_case.rs

use shared_kernel::domain::value_objects::{GeoPoint, Latitude, Longitude};
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::concurrency::with_cancellation;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::application::resolve_vehicle::ResolveVehicleUseCase;
use crate::application::save_location::required;
use crate::application::search_locations::{LocationResultDto, SearchLocationsCommand};
use crate::domain::repositories::LocationRepository;
use crate::domain::value_objects::{DistanceUnit, SearchRadius};

pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 200.0;

pub struct SearchLocationsUseCase {
    locations: Arc<dyn LocationRepository>,
    resolver: Arc<ResolveVehicleUseCase>,
}

impl SearchLocationsUseCase {
    pub fn new(locations: Arc<dyn LocationRepository>, resolver: Arc<ResolveVehicleUseCase>) -> Self {
        Self { locations, resolver }
    }

    pub async fn execute(
        &self,
        cmd: SearchLocationsCommand,
        token: &CancellationToken,
    ) -> Result<Vec<LocationResultDto>> {
        with_cancellation(token, self.run(cmd)).await
    }

    async fn run(&self, cmd: SearchLocationsCommand) -> Result<Vec<LocationResultDto>> {
        // 1. Présence uniquement : un centre hors limites donne un résultat vide
        let lat = required(cmd.lat, Latitude::FIELD)?;
        let lng = required(cmd.lng, Longitude::FIELD)?;
        let center = GeoPoint::from_raw(lat, lng);

        // 2. Rayon fixe, limite par défaut
        let radius = SearchRadius::try_new(DEFAULT_SEARCH_RADIUS_KM, DistanceUnit::Kilometers)?;
        let hits = self.locations.search(center, radius, 0).await?;

        // 3. Résolution séquentielle, dans l'ordre des distances
        let mut results = Vec::with_capacity(hits.len());
        for (location, dist) in hits {
            let vehicle = match self.resolver.execute(location.vehicle_id()).await {
                Ok(vehicle) => vehicle,
                Err(e) if e.is_not_found() => {
                    tracing::debug!(vehicle_id = %location.vehicle_id(), "Skipping hit: vehicle no longer exists");
                    continue;
                }
                Err(e) => return Err(e),
            };

            results.push(LocationResultDto {
                vehicle,
                lat: location.lat(),
                lng: location.lng(),
                dist,
            });
        }

        Ok(results)
    }
}
