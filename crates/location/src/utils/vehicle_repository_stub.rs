// crates/location/src/utils/vehicle_repository_stub.rs

use async_trait::async_trait;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::{DomainError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::Vehicle;
use crate::domain::repositories::VehicleRepository;
use crate::domain::value_objects::VehicleId;

#[derive(Default)]
pub struct VehicleRepositoryStub {
    pub storage: Mutex<HashMap<VehicleId, Vehicle>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub get_calls: AtomicUsize,
    pub save_calls: AtomicUsize,
}

impl VehicleRepositoryStub {
    pub fn with_vehicle(vehicle: Vehicle) -> Self {
        let stub = Self::default();
        stub.storage
            .lock()
            .unwrap()
            .insert(vehicle.id().clone(), vehicle);
        stub
    }

    pub fn failing() -> Self {
        let stub = Self::default();
        stub.fail_reads.store(true, Ordering::SeqCst);
        stub.fail_writes.store(true, Ordering::SeqCst);
        stub
    }

    pub fn contains(&self, id: &str) -> bool {
        self.storage
            .lock()
            .unwrap()
            .contains_key(&VehicleId::from_raw(id))
    }
}

#[async_trait]
impl VehicleRepository for VehicleRepositoryStub {
    async fn get(&self, id: &VehicleId) -> Result<Vehicle> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("Cache Down".into()));
        }
        self.storage
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_not_found(id)
    }

    async fn save(&self, vehicle: &Vehicle) -> Result<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("Cache Down".into()));
        }
        self.storage
            .lock()
            .unwrap()
            .insert(vehicle.id().clone(), vehicle.clone());
        Ok(())
    }

    async fn delete(&self, id: &VehicleId) -> Result<()> {
        self.storage.lock().unwrap().remove(id);
        Ok(())
    }
}
