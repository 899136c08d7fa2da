pub mod ports;
pub mod resolve_vehicle;
pub mod save_location;
pub mod search_locations;
