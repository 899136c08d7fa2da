mod token_service;
mod vehicle_directory;

pub use token_service::{Claims, TokenService};
pub use vehicle_directory::VehicleDirectory;
