// crates/location/src/utils/location_repository_stub.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::GeoPoint;
use shared_kernel::errors::{DomainError, Result};
use std::sync::Mutex;

use crate::domain::entities::DriverLocation;
use crate::domain::repositories::LocationRepository;
use crate::domain::value_objects::SearchRadius;

/// Spy : enregistre les écritures et renvoie des résultats de recherche prédéfinis
#[derive(Default)]
pub struct LocationRepositoryStub {
    pub saved: Mutex<Vec<DriverLocation>>,
    pub nearby_to_return: Mutex<Vec<(DriverLocation, f64)>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    pub searches: Mutex<Vec<(GeoPoint, SearchRadius, i64)>>,
}

impl LocationRepositoryStub {
    pub fn with_nearby(nearby: Vec<(DriverLocation, f64)>) -> Self {
        let stub = Self::default();
        *stub.nearby_to_return.lock().unwrap() = nearby;
        stub
    }

    pub fn failing(error: DomainError) -> Self {
        let stub = Self::default();
        *stub.error_to_return.lock().unwrap() = Some(error);
        stub
    }

    pub fn saved_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }
}

#[async_trait]
impl LocationRepository for LocationRepositoryStub {
    async fn save(&self, location: &DriverLocation) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        self.saved.lock().unwrap().push(location.clone());
        Ok(())
    }

    async fn search(
        &self,
        center: GeoPoint,
        radius: SearchRadius,
        limit: i64,
    ) -> Result<Vec<(DriverLocation, f64)>> {
        self.searches.lock().unwrap().push((center, radius, limit));
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.nearby_to_return.lock().unwrap().clone())
    }
}
