mod location_repository;
mod vehicle_repository;

pub use location_repository::LocationRepository;
pub use vehicle_repository::VehicleRepository;
