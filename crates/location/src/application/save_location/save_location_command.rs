// crates/location/src/application/save_location/save_location_command.rs

/// Position envoyée par un conducteur. Les champs absents sont rejetés par le use case.
#[derive(Debug, Clone, Default)]
pub struct SaveLocationCommand {
    pub caller_id: String, // Sujet du jeton d'accès
    pub vehicle_id: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}
