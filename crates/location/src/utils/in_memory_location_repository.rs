// crates/location/src/utils/in_memory_location_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::Result;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::DriverLocation;
use crate::domain::repositories::LocationRepository;
use crate::domain::value_objects::{effective_limit, SearchRadius, VehicleId};

/// Index géographique en mémoire (distances haversine), même contrat que Redis
#[derive(Default)]
pub struct InMemoryLocationRepository {
    positions: Mutex<HashMap<VehicleId, GeoPoint>>,
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn save(&self, location: &DriverLocation) -> Result<()> {
        location.ensure_valid()?;
        self.positions
            .lock()
            .unwrap()
            .insert(location.vehicle_id().clone(), location.coordinates());
        Ok(())
    }

    async fn search(
        &self,
        center: GeoPoint,
        radius: SearchRadius,
        limit: i64,
    ) -> Result<Vec<(DriverLocation, f64)>> {
        if !center.is_valid() {
            return Ok(Vec::new());
        }

        let max_meters = radius.in_meters();
        let mut hits: Vec<(DriverLocation, f64)> = self
            .positions
            .lock()
            .unwrap()
            .iter()
            .map(|(id, point)| (id, point, center.distance_to(point)))
            .filter(|(_, _, meters)| *meters <= max_meters)
            .map(|(id, point, meters)| {
                (
                    DriverLocation::new(id.clone(), *point),
                    radius.unit().from_meters(meters),
                )
            })
            .collect();

        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        hits.truncate(effective_limit(limit));

        Ok(hits)
    }
}
