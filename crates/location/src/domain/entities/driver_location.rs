// crates/location/src/domain/entities/driver_location.rs

use shared_kernel::domain::value_objects::{GeoPoint, Latitude, Longitude, ValueObject};
use shared_kernel::errors::Result;

use crate::domain::value_objects::VehicleId;

/// Dernière position connue d'un véhicule dans l'index géographique.
/// La distance n'est jamais stockée : elle accompagne les résultats de recherche.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverLocation {
    vehicle_id: VehicleId,
    coordinates: GeoPoint,
}

impl DriverLocation {
    pub fn new(vehicle_id: VehicleId, coordinates: GeoPoint) -> Self {
        Self {
            vehicle_id,
            coordinates,
        }
    }

    /// Validation dans l'ordre : vehicle_id, lat, lng
    pub fn try_new(vehicle_id: &str, lat: f64, lng: f64) -> Result<Self> {
        let vehicle_id = VehicleId::try_new(vehicle_id)?;
        let coordinates = GeoPoint::try_new(lat, lng)?;

        Ok(Self::new(vehicle_id, coordinates))
    }

    pub fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    pub fn coordinates(&self) -> GeoPoint {
        self.coordinates
    }

    pub fn lat(&self) -> f64 {
        self.coordinates.lat()
    }

    pub fn lng(&self) -> f64 {
        self.coordinates.lon()
    }

    /// Contrôle avant écriture (l'entité a pu être construite sans validation)
    pub fn ensure_valid(&self) -> Result<()> {
        self.vehicle_id.validate()?;

        Latitude::from_raw(self.lat()).validate()?;
        Longitude::from_raw(self.lng()).validate()?;

        Ok(())
    }
}
