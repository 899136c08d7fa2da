// crates/location/src/domain/builders/vehicle_builder.rs

use crate::domain::entities::{Driver, Vehicle};
use crate::domain::value_objects::VehicleId;

pub struct VehicleBuilder {
    id: VehicleId,
    name: String,
    plate: String,
    vehicle_type: String,
    class: String,
    seats: i32,
    driver: Driver,
}

impl VehicleBuilder {
    /// Seuls l'identifiant et le propriétaire sont obligatoires
    pub fn new(id: VehicleId, owner_id: impl Into<String>) -> Self {
        Self {
            id,
            name: String::new(),
            plate: String::new(),
            vehicle_type: String::new(),
            class: String::new(),
            seats: 0,
            driver: Driver::new(owner_id, "", "", "", ""),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = plate.into();
        self
    }

    pub fn with_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = vehicle_type.into();
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_seats(mut self, seats: i32) -> Self {
        self.seats = seats;
        self
    }

    /// Remplace le conducteur complet (y compris son identifiant)
    pub fn with_driver(mut self, driver: Driver) -> Self {
        self.driver = driver;
        self
    }

    pub fn build(self) -> Vehicle {
        Vehicle::new_from_builder(
            self.id,
            self.name,
            self.plate,
            self.vehicle_type,
            self.class,
            self.seats,
            self.driver,
        )
    }
}
