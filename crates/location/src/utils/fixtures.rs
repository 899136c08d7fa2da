// crates/location/src/utils/fixtures.rs

use crate::domain::builders::VehicleBuilder;
use crate::domain::entities::{Driver, Vehicle};
use crate::domain::value_objects::VehicleId;

pub fn vehicle(id: &str, owner_id: &str) -> Vehicle {
    VehicleBuilder::new(VehicleId::from_raw(id), owner_id)
        .with_name(format!("Vehicle {}", id))
        .with_plate("AB-123-CD")
        .with_type("sedan")
        .with_class("comfort")
        .with_seats(4)
        .with_driver(Driver::new(owner_id, "Jane Doe", "jane", "jane@example.com", ""))
        .build()
}
