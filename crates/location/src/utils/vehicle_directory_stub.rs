// crates/location/src/utils/vehicle_directory_stub.rs

use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::application::ports::VehicleDirectory;
use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;

#[derive(Default)]
pub struct VehicleDirectoryStub {
    pub vehicles: Mutex<HashMap<VehicleId, Vehicle>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    pub fetch_calls: AtomicUsize,
    /// Latence simulée du service distant
    pub delay: Option<Duration>,
}

impl VehicleDirectoryStub {
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        let stub = Self::default();
        {
            let mut map = stub.vehicles.lock().unwrap();
            for vehicle in vehicles {
                map.insert(vehicle.id().clone(), vehicle);
            }
        }
        stub
    }

    pub fn failing(error: DomainError) -> Self {
        let stub = Self::default();
        *stub.error_to_return.lock().unwrap() = Some(error);
        stub
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn remove(&self, id: &str) {
        self.vehicles.lock().unwrap().remove(&VehicleId::from_raw(id));
    }
}

#[async_trait]
impl VehicleDirectory for VehicleDirectoryStub {
    async fn fetch_vehicles(&self, ids: &[VehicleId]) -> Result<HashMap<VehicleId, Vehicle>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }

        let vehicles = self.vehicles.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| vehicles.get(id).map(|v| (id.clone(), v.clone())))
            .collect())
    }
}
