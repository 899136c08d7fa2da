// crates/location/src/application/search_locations/search_locations_command.rs

#[derive(Debug, Clone, Default)]
pub struct SearchLocationsCommand {
    pub lat: Option<f64>, // Centre de la recherche (position du passager)
    pub lng: Option<f64>,
}
