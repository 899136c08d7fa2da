// crates/location/src/infrastructure/api/http/dto.rs

use serde::Deserialize;

use crate::application::save_location::SaveLocationCommand;
use crate::application::search_locations::SearchLocationsCommand;

#[derive(Debug, Deserialize)]
pub struct SaveLocationRequest {
    #[serde(default)]
    pub vehicle_id: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl SaveLocationRequest {
    pub fn into_command(self, caller_id: String) -> SaveLocationCommand {
        SaveLocationCommand {
            caller_id,
            vehicle_id: self.vehicle_id,
            lat: self.lat,
            lng: self.lng,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchLocationRequest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl From<SearchLocationRequest> for SearchLocationsCommand {
    fn from(req: SearchLocationRequest) -> Self {
        Self {
            lat: req.lat,
            lng: req.lng,
        }
    }
}
