// crates/location/src/domain/entities/vehicle.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;

use crate::domain::value_objects::VehicleId;

/// Conducteur propriétaire du véhicule (copie locale, la source de vérité est le service Vehicle)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    user_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    nickname: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    picture: String,
}

impl Driver {
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        nickname: impl Into<String>,
        email: impl Into<String>,
        picture: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            nickname: nickname.into(),
            email: email.into(),
            picture: picture.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn picture(&self) -> &str {
        &self.picture
    }
}

/// Fiche véhicule hydratée, immuable une fois récupérée
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "vehicle_id")]
    id: VehicleId,
    name: String,
    plate: String,
    #[serde(rename = "type")]
    vehicle_type: String,
    class: String,
    seats: i32,
    #[serde(default)]
    driver: Driver,
}

impl Vehicle {
    pub(crate) fn new_from_builder(
        id: VehicleId,
        name: String,
        plate: String,
        vehicle_type: String,
        class: String,
        seats: i32,
        driver: Driver,
    ) -> Self {
        Self {
            id,
            name,
            plate,
            vehicle_type,
            class,
            seats,
            driver,
        }
    }

    // --- Getters ---

    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn seats(&self) -> i32 {
        self.seats
    }

    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    pub fn owner_id(&self) -> &str {
        self.driver.user_id()
    }

    /// Un propriétaire vide ne correspond à aucun appelant
    pub fn is_owned_by(&self, caller_id: &str) -> bool {
        !self.owner_id().is_empty() && self.owner_id() == caller_id
    }
}

impl EntityMetadata for Vehicle {
    fn entity_name() -> &'static str {
        "Vehicle"
    }
}
