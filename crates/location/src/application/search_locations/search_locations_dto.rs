// crates/location/src/application/search_locations/search_locations_dto.rs

use serde::Serialize;

use crate::domain::entities::Vehicle;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationResultDto {
    pub vehicle: Vehicle,
    pub lat: f64,
    pub lng: f64,
    pub dist: f64, // En kilomètres
}
